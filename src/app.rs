// src/app.rs
//
// Calculatrice à pile — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier physique, sauf quand un champ texte (programme) a le focus.
        if !ctx.wants_keyboard_input() {
            self.clavier(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Raccourcis : chiffres, . + - * /, Enter, Backspace, Escape (= AC).
    fn clavier(&mut self, ctx: &egui::Context) {
        let (texte, entrer, effacer, echap) = ctx.input(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            (
                texte,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for c in texte.chars() {
            match c {
                '0'..='9' | '.' => self.saisir_chiffre(&c.to_string()),
                '+' | '-' => self.operer(&c.to_string()),
                '*' => self.operer("×"),
                '/' => self.operer("÷"),
                _ => {}
            }
        }

        if entrer {
            self.entrer();
        }
        if effacer {
            self.effacer_chiffre();
        }
        if echap {
            self.tout_effacer();
        }
    }
}
