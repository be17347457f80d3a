// src/noyau/format.rs
//
// Affichage du résultat numérique.

/// Au-delà, un f64 n’a plus de partie fractionnaire représentable de toute façon :
/// on laisse Display écrire tous les chiffres.
const SEUIL_ENTIER: f64 = 1e15;

/// Formate un résultat fini :
/// - entier (|v| < 1e15) => sans partie décimale ("14", "-3")
/// - sinon => plus courte écriture décimale exacte ("2.5", "0.1")
/// - -0 => "0"
pub fn format_resultat(v: f64) -> String {
    // normalise -0.0
    let v = if v == 0.0 { 0.0 } else { v };

    if v.fract() == 0.0 && v.abs() < SEUIL_ENTIER {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
