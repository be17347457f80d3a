//! Tests de propriétés : précédence, idempotence, aller-retour des jetons, robustesse.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::eval::{calculer, evaluate};
use super::jetons::{format_jetons, tokenize, Jeton, Operateur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const OPS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn gen_nombre(rng: &mut Rng, non_nul: bool) -> f64 {
    let base = if non_nul { 1 + rng.pick(99) } else { rng.pick(100) };
    match rng.pick(4) {
        // quarts : exacts en binaire, donc relisibles à l’identique
        0 => base as f64 + 0.25 * (1 + rng.pick(3)) as f64,
        _ => base as f64,
    }
}

/// Suite bien formée, diviseurs non nuls.
fn gen_suite(rng: &mut Rng, max_ops: u32) -> Vec<Jeton> {
    let mut out = vec![Jeton::Nombre(gen_nombre(rng, false))];
    for _ in 0..rng.pick(max_ops + 1) {
        let op = OPS[rng.pick(4) as usize];
        out.push(Jeton::Op(op));
        out.push(Jeton::Nombre(gen_nombre(rng, op == Operateur::Divise)));
    }
    out
}

/// Évaluateur de référence : somme (gauche -> droite) de termes,
/// chaque terme = produit/quotient gauche -> droite.
fn reference(jetons: &[Jeton]) -> f64 {
    let mut somme = 0.0;
    let mut signe_terme = Operateur::Plus;
    let mut terme: Option<f64> = None;
    let mut op_mult = Operateur::Fois;

    for j in jetons {
        match *j {
            Jeton::Nombre(v) => {
                terme = Some(match terme {
                    None => v,
                    Some(t) if op_mult == Operateur::Fois => t * v,
                    Some(t) => t / v,
                });
            }
            Jeton::Op(op @ (Operateur::Fois | Operateur::Divise)) => op_mult = op,
            Jeton::Op(op) => {
                somme = cumuler(somme, signe_terme, terme.take());
                signe_terme = op;
            }
        }
    }
    cumuler(somme, signe_terme, terme)
}

fn cumuler(somme: f64, signe: Operateur, terme: Option<f64>) -> f64 {
    let t = terme.unwrap_or(0.0);
    match signe {
        Operateur::Moins => somme - t,
        _ => somme + t,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn precedence_conforme_a_la_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let suite = gen_suite(&mut rng, 8);
        let texte = format_jetons(&suite, "");
        let attendu = reference(&suite);

        let obtenu = calculer(&texte).unwrap_or_else(|e| panic!("expr={texte:?} err={e}"));

        // même ordre d’opérations => bit à bit identique (0.0 + x == x pour le premier terme)
        assert_eq!(obtenu, attendu, "expr={texte:?}");
    }
}

#[test]
fn idempotence() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let texte = format_jetons(&gen_suite(&mut rng, 6), "");
        assert_eq!(evaluate(&texte), evaluate(&texte), "expr={texte:?}");
    }

    // les erreurs aussi
    for s in ["5/0", "", "3+", "2+a"] {
        assert_eq!(evaluate(s), evaluate(s));
    }
}

#[test]
fn aller_retour_des_jetons() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        let suite = gen_suite(&mut rng, 10);
        let texte = format_jetons(&suite, "");
        let relu = tokenize(&texte).unwrap_or_else(|e| panic!("expr={texte:?} err={e}"));
        assert_eq!(relu, suite, "expr={texte:?}");
    }
}

#[test]
fn soupe_de_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let alphabet: Vec<char> = "0123456789..+-*/ a(".chars().collect();
    let mut rng = Rng::new(0xFEED_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(12) as usize;
        let texte: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        match calculer(&texte) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={texte:?} v={v}");
                vus_ok += 1;
            }
            Err(e) => {
                // tout échec est classé ; rien ne « fuit » en panique
                let g = e.genre();
                assert!(
                    matches!(
                        g,
                        GenreErreur::CaractereInvalide
                            | GenreErreur::DivisionParZero
                            | GenreErreur::ExpressionMalformee
                    ),
                    "expr={texte:?} genre={g:?}"
                );
                vus_err += 1;
            }
        }
    }

    assert!(vus_ok > 0, "aucun succès: soupe trop sale");
    assert!(vus_err > 0, "aucune erreur vue");
}
