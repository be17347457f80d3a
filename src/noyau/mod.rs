//! Noyau : évaluateur d’expressions à quatre opérations.
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie des erreurs (thiserror)
//! - jetons.rs    : tokenisation (nombres + - * /)
//! - reduction.rs : réduction en deux passes (* / puis + -)
//! - format.rs    : écriture décimale du résultat
//! - eval.rs      : pipeline complet
//!
//! Fonction pure : aucun état partagé entre deux évaluations.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reduction;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::evaluate;
pub use jetons::{format_jetons, tokenize};
