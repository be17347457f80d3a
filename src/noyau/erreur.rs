// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toute erreur est détectée au point de violation et remonte telle quelle :
// pas de résultat partiel, pas de coercition silencieuse.

use thiserror::Error;

/// Classement grossier d’une erreur (utile pour l’UI et les tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    CaractereInvalide,
    DivisionParZero,
    ExpressionMalformee,
    HorsLimites,
}

/// Défaut structurel précis d’une expression malformée.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("entrée vide")]
    Vide,

    #[error("opérateur en tête")]
    OperateurEnTete,

    #[error("opérande manquant après le dernier opérateur")]
    OperateurEnFin,

    #[error("opérateurs consécutifs (jeton {position})")]
    OperateursConsecutifs { position: usize },

    #[error("nombres consécutifs (jeton {position})")]
    NombresConsecutifs { position: usize },

    #[error("nombre invalide: {litteral:?}")]
    LitteralInvalide { litteral: String },

    #[error("réduction incomplète ({restants} jetons restants)")]
    ResteNonReduit { restants: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Caractère hors chiffres, '.', + - * /.
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInvalide { caractere: char, position: usize },

    /// Opérande droit d’un '/' égal à 0.
    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide: {0}")]
    ExpressionMalformee(#[from] Malformation),

    /// Littéral ou résultat non fini (dépassement f64).
    #[error("résultat hors limites")]
    HorsLimites,
}

impl ErreurEval {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurEval::CaractereInvalide { .. } => GenreErreur::CaractereInvalide,
            ErreurEval::DivisionParZero => GenreErreur::DivisionParZero,
            ErreurEval::ExpressionMalformee(_) => GenreErreur::ExpressionMalformee,
            ErreurEval::HorsLimites => GenreErreur::HorsLimites,
        }
    }
}
