// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran (résultat ou ERR) + historique des expressions (moteur)
// - Pavé numérique + opérateurs + π / M / →M
// - Journal des actions et import/export du programme (repliables)

use eframe::egui;

use super::etat::{AppCalc, NOM_MEMOIRE};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice à pile");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
                self.ui_programme(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let description = self.description();
        Self::champ_monospace(ui, "description_out", &description, 1);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(32.0));
                });
            });

        if let Some(m) = self.memoire() {
            ui.small(format!("{NOM_MEMOIRE} = {m}"));
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre);
                self.bouton(ui, "8", Touche::Chiffre);
                self.bouton(ui, "9", Touche::Chiffre);
                self.bouton(ui, "÷", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre);
                self.bouton(ui, "5", Touche::Chiffre);
                self.bouton(ui, "6", Touche::Chiffre);
                self.bouton(ui, "×", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre);
                self.bouton(ui, "2", Touche::Chiffre);
                self.bouton(ui, "3", Touche::Chiffre);
                self.bouton(ui, "-", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre);
                self.bouton(ui, ".", Touche::Chiffre);
                self.bouton(ui, "⏎", Touche::Entrer);
                self.bouton(ui, "+", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "√", Touche::Operateur);
                self.bouton(ui, "sin", Touche::Operateur);
                self.bouton(ui, "cos", Touche::Operateur);
                self.bouton(ui, "tan", Touche::Operateur);
                ui.end_row();

                self.bouton(ui, "π", Touche::Special);
                self.bouton(ui, NOM_MEMOIRE, Touche::Special);
                self.bouton(ui, "→M", Touche::Memoriser);
                self.bouton(ui, "AC", Touche::ToutEffacer);
                ui.end_row();

                self.bouton(ui, "⌫", Touche::Effacer);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Journal")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_monospace(ui, "journal_out", &self.journal, 4);
            });
    }

    fn ui_programme(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Programme")
            .default_open(false)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.programme_json)
                        .desired_width(ui.available_width())
                        .desired_rows(3)
                        .hint_text("[\"3\",\"4\",\"+\"]")
                        .id_source("programme_edit")
                        .code_editor(),
                );

                ui.horizontal(|ui| {
                    if ui.button("Exporter").clicked() {
                        self.exporter_programme();
                    }
                    if ui.button("Importer").clicked() {
                        self.importer_programme();
                    }
                });

                if !self.erreur_programme.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur_programme);
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre => self.saisir_chiffre(label),
            Touche::Operateur => self.operer(label),
            Touche::Special => self.pousser_special(label),
            Touche::Entrer => self.entrer(),
            Touche::Memoriser => self.memoriser(),
            Touche::Effacer => self.effacer_chiffre(),
            Touche::ToutEffacer => self.tout_effacer(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre,
    Operateur,
    Special,
    Entrer,
    Memoriser,
    Effacer,
    ToutEffacer,
}
