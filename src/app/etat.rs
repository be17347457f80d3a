//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, aperçu des jetons)
//! et offrir des opérations simples (saisie, DEL, C) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Résultat et erreur sont exclusifs : jamais un ancien résultat à côté d’une erreur.

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties (exclusives) ---
    pub resultat: String,
    pub erreur: String,

    // aperçu "2 + 3 * 4" de la dernière évaluation réussie
    pub jetons: String,

    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            jetons: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// Touche chiffre / '.' / opérateur : ajoute le symbole tel quel.
    pub fn saisir(&mut self, symbole: char) {
        self.entree.push(symbole);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// C : remise à zéro (entrée + résultat + erreur).
    pub fn clear(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.jetons.clear();
        self.focus_entree = true;
    }

    /// Place une erreur : le résultat précédent disparaît.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat.clear();
        self.jetons.clear();
        self.focus_entree = true;
    }

    /// Dépose un résultat : l’erreur précédente disparaît.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, jetons: impl Into<String>) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.jetons = jetons.into();
        self.focus_entree = true;
    }

    /// Texte à afficher sous l’entrée : l’erreur si présente, sinon le résultat.
    pub fn affichage(&self) -> &str {
        if self.erreur.is_empty() {
            &self.resultat
        } else {
            &self.erreur
        }
    }
}
