// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{ErreurEval, Malformation};

/// Palier de précédence : tout le palier multiplicatif est réduit avant l’additif.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palier {
    Multiplicatif,
    Additif,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    pub fn palier(self) -> Palier {
        match self {
            Self::Fois | Self::Divise => Palier::Multiplicatif,
            Self::Plus | Self::Moins => Palier::Additif,
        }
    }

    /// Applique l’opérateur à (gauche, droite).
    /// Division par 0.0 => erreur ; résultat non fini => HorsLimites.
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, ErreurEval> {
        let v = match self {
            Self::Plus => gauche + droite,
            Self::Moins => gauche - droite,
            Self::Fois => gauche * droite,
            Self::Divise => {
                if droite == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                gauche / droite
            }
        };

        if !v.is_finite() {
            return Err(ErreurEval::HorsLimites);
        }
        Ok(v)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Display f64 = plus courte écriture qui se relit à l’identique (jamais d’exposant)
            Jeton::Nombre(v) => write!(f, "{v}"),
            Jeton::Op(op) => write!(f, "{}", op.symbole()),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * /
///
/// Tout autre caractère (espaces compris) => CaractereInvalide, au premier rencontré.
/// Un littéral mal formé ("1.2.3", ".") => ExpressionMalformee, mais seulement
/// si aucun caractère invalide n’apparaît plus loin.
///
/// La structure (alternance nombre/opérateur) n’est PAS vérifiée ici :
/// "-5", "3+" ou "2**3" tokenisent sans erreur ; `reduce` les refusera.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out = Vec::new();
    let mut tampon = String::new();
    let mut faute_litteral: Option<ErreurEval> = None;

    for (position, c) in s.chars().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            continue;
        }

        match Operateur::depuis_symbole(c) {
            Some(op) => {
                vider_tampon(&mut tampon, &mut out, &mut faute_litteral);
                out.push(Jeton::Op(op));
            }
            None => {
                return Err(ErreurEval::CaractereInvalide {
                    caractere: c,
                    position,
                })
            }
        }
    }

    vider_tampon(&mut tampon, &mut out, &mut faute_litteral);

    match faute_litteral {
        Some(e) => Err(e),
        None => Ok(out),
    }
}

/// Pousse le nombre en cours (s’il y en a un) ; retient la première faute de littéral.
fn vider_tampon(tampon: &mut String, out: &mut Vec<Jeton>, faute: &mut Option<ErreurEval>) {
    if tampon.is_empty() {
        return;
    }

    match lire_nombre(tampon) {
        Ok(v) => out.push(Jeton::Nombre(v)),
        Err(e) => {
            if faute.is_none() {
                *faute = Some(e);
            }
        }
    }
    tampon.clear();
}

fn lire_nombre(litteral: &str) -> Result<f64, ErreurEval> {
    let v: f64 = litteral.parse().map_err(|_| Malformation::LitteralInvalide {
        litteral: litteral.to_string(),
    })?;

    // ex: 400 chiffres => inf
    if !v.is_finite() {
        return Err(ErreurEval::HorsLimites);
    }
    Ok(v)
}

/// Format utilitaire : liste de jetons en texte.
/// Avec `sep = ""`, le texte se re-tokenize en une suite égale.
pub fn format_jetons(jetons: &[Jeton], sep: &str) -> String {
    jetons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
