// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{evaluate, format_jetons, tokenize};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, 10/2-3")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (pas de déclenchement global)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if self.erreur.is_empty() {
                    ui.heading(egui::RichText::new(self.affichage()).monospace());
                } else {
                    ui.colored_label(ui.visuals().error_fg_color, self.affichage());
                }
            });

        if !self.jetons.is_empty() {
            ui.add_space(4.0);
            ui.weak(format!("Jetons : {}", self.jetons));
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface entrée + résultat", Action::Clear);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in ["789/", "456*", "123-", "0.=+"] {
                    for c in rangee.chars() {
                        if c == '=' {
                            self.bouton_action(ui, "=", "Calculer", Action::Evaluer);
                        } else {
                            self.bouton_saisie(ui, c);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 40.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Clear => self.clear(),
                Action::Backspace => self.backspace_entree(),
                Action::Evaluer => self.eval_via_noyau(),
            }
        }
    }

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, symbole: char) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(symbole.to_string()));
        if resp.clicked() {
            self.saisir(symbole);
        }
    }

    /// Évalue l’entrée via le noyau puis dépose résultat OU erreur dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match evaluate(&self.entree) {
            Ok(resultat) => {
                // tokenize a déjà réussi dans evaluate : l’aperçu ne peut pas échouer ici
                let jetons = tokenize(&self.entree)
                    .map(|j| format_jetons(&j, " "))
                    .unwrap_or_default();
                self.set_resultat(resultat, jetons);
            }
            Err(msg) => self.set_erreur(msg),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Clear,
    Backspace,
    Evaluer,
}
