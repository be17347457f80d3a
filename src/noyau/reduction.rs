// src/noyau/reduction.rs
//
// Réduction en deux passes gauche -> droite (pas un shunting-yard) :
// 1) palier multiplicatif (* /)
// 2) palier additif (+ -)
//
// Chaque passe construit une NOUVELLE suite (pli fonctionnel) au lieu de
// retirer des éléments pendant le parcours : même résultat observable,
// aucun décalage d’index.

use super::erreur::{ErreurEval, Malformation};
use super::jetons::{Jeton, Operateur, Palier};

/// Suite bien formée : Nombre (Op Nombre)*.
/// L’alternance est garantie par construction (voir `Suite::depuis_jetons`).
#[derive(Clone, Debug)]
struct Suite {
    tete: f64,
    queue: Vec<(Operateur, f64)>,
}

impl Suite {
    /// Vérifie l’alternance stricte Nombre, Op, Nombre, …, Nombre.
    fn depuis_jetons(jetons: &[Jeton]) -> Result<Self, Malformation> {
        let (premier, reste) = jetons.split_first().ok_or(Malformation::Vide)?;

        let tete = match premier {
            Jeton::Nombre(v) => *v,
            Jeton::Op(_) => return Err(Malformation::OperateurEnTete),
        };

        let mut queue = Vec::with_capacity(reste.len() / 2);
        let mut position = 1usize;

        for paire in reste.chunks(2) {
            match paire {
                [Jeton::Op(op), Jeton::Nombre(v)] => queue.push((*op, *v)),
                [Jeton::Op(_)] => return Err(Malformation::OperateurEnFin),
                [Jeton::Op(_), Jeton::Op(_)] => {
                    return Err(Malformation::OperateursConsecutifs {
                        position: position + 1,
                    })
                }
                // un nombre là où un opérateur est attendu
                _ => return Err(Malformation::NombresConsecutifs { position }),
            }
            position += 2;
        }

        Ok(Self { tete, queue })
    }

    /// Une passe : replie tous les opérateurs du palier donné, de gauche à droite.
    fn replier(self, palier: Palier) -> Result<Self, ErreurEval> {
        let mut sortie = Suite {
            tete: self.tete,
            queue: Vec::with_capacity(self.queue.len()),
        };

        for (op, droite) in self.queue {
            if op.palier() != palier {
                sortie.queue.push((op, droite));
                continue;
            }

            // voisin gauche = dernier nombre déjà émis
            let gauche = match sortie.queue.last_mut() {
                Some((_, v)) => v,
                None => &mut sortie.tete,
            };
            *gauche = op.appliquer(*gauche, droite)?;
        }

        Ok(sortie)
    }

    fn len(&self) -> usize {
        1 + 2 * self.queue.len()
    }
}

/// Réduit une suite de jetons en une valeur.
///
/// - ExpressionMalformee : vide, opérateur en tête/fin, deux opérateurs ou deux nombres
///   consécutifs, ou suite non réduite à un seul nombre.
/// - DivisionParZero : opérande droit d’un '/' égal à 0.
/// - HorsLimites : résultat intermédiaire non fini.
pub fn reduce(jetons: Vec<Jeton>) -> Result<f64, ErreurEval> {
    let suite = Suite::depuis_jetons(&jetons)?;

    let suite = suite
        .replier(Palier::Multiplicatif)?
        .replier(Palier::Additif)?;

    if !suite.queue.is_empty() {
        return Err(Malformation::ResteNonReduit {
            restants: suite.len(),
        }
        .into());
    }

    Ok(suite.tete)
}
