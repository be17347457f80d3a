//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> reduce (2 passes) -> format
//!
//! Aucun état retenu entre deux appels : même entrée => même sortie.

use tracing::debug;

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::tokenize;
use super::reduction::reduce;

/// Évalue une expression et retourne la valeur typée.
pub fn calculer(expression: &str) -> Result<f64, ErreurEval> {
    let jetons = tokenize(expression)?;
    debug!(expression, jetons = jetons.len(), "évaluation");

    reduce(jetons)
}

/// API publique (frontière avec la coquille UI) :
/// - Ok  : écriture décimale du résultat
/// - Err : message lisible
pub fn evaluate(expression: &str) -> Result<String, String> {
    match calculer(expression) {
        Ok(v) => Ok(format_resultat(v)),
        Err(e) => {
            debug!(expression, genre = ?e.genre(), "échec: {e}");
            Err(e.to_string())
        }
    }
}
