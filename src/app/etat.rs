//! src/app/etat.rs
//!
//! État UI (sans vue) : le “collaborateur” du moteur.
//!
//! Rôle : assembler la saisie chiffre par chiffre, pousser nombres / opérateurs
//! / symboles dans le moteur, afficher le résultat (ou ERR), tenir le journal.
//!
//! Contrats :
//! - Aucune logique d’évaluation ici : tout passe par `Moteur`.
//! - “Indisponible” côté moteur (None) => jeton ERR à l’écran.
//! - Au plus un point décimal par nombre saisi.

use crate::noyau::nombre::lire_valeur;
use crate::noyau::{format_valeur, Moteur, Programme};

/// Jeton affiché quand le moteur ne peut rien calculer.
pub const JETON_ERREUR: &str = "ERR";

/// Nom de la variable mémoire (touches →M / M).
pub const NOM_MEMOIRE: &str = "M";

/// En-tête du journal (après AC).
const JOURNAL_INITIAL: &str = "Historique";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- écran ---
    pub affichage: String,
    pub en_saisie: bool,

    // --- journal (une ligne par action) ---
    pub journal: String,

    // --- import / export du programme (JSON) ---
    pub programme_json: String,
    pub erreur_programme: String,

    moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            en_saisie: false,
            journal: JOURNAL_INITIAL.to_string(),
            programme_json: String::new(),
            erreur_programme: String::new(),
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Écran <-> valeur ------------------------ */

    /// Valeur à l’écran (None si ERR ou illisible).
    pub fn valeur_affichee(&self) -> Option<f64> {
        if self.affichage == JETON_ERREUR {
            return None;
        }
        lire_valeur(&self.affichage)
    }

    /// Dépose un résultat à l’écran ; termine la saisie en cours.
    pub fn set_valeur(&mut self, valeur: Option<f64>) {
        self.affichage = match valeur {
            Some(v) => format_valeur(v),
            None => JETON_ERREUR.to_string(),
        };
        self.en_saisie = false;
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal.
    /// - premier caractère “.” => “0.”
    /// - un second “.” dans le même nombre est ignoré
    pub fn saisir_chiffre(&mut self, chiffre: &str) {
        if self.en_saisie {
            if chiffre != "." || !self.affichage.contains('.') {
                self.affichage.push_str(chiffre);
            }
        } else {
            self.affichage = if chiffre == "." {
                "0.".to_string()
            } else {
                chiffre.to_string()
            };
            self.en_saisie = true;
        }
    }

    /// Retire le dernier caractère saisi ; vide => “0”, saisie terminée.
    pub fn effacer_chiffre(&mut self) {
        if !self.en_saisie {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = "0".to_string();
            self.en_saisie = false;
        }
    }

    /* ------------------------ Actions moteur ------------------------ */

    /// ⏎ : pousse le nombre affiché.
    pub fn entrer(&mut self) {
        self.en_saisie = false;

        if let Some(v) = self.valeur_affichee() {
            let r = self.moteur.push_number(v);
            self.set_valeur(r);
            let ligne = self.affichage.clone();
            self.noter(&ligne);
        }
    }

    /// Opérateur : ⏎ implicite si un nombre est en cours de saisie.
    pub fn operer(&mut self, symbole: &str) {
        if self.en_saisie {
            self.entrer();
        }

        self.noter(symbole);
        self.noter("=");

        let r = self.moteur.apply_operator(symbole);
        self.set_valeur(r);

        let ligne = self.affichage.clone();
        self.noter(&ligne);
    }

    /// π, M… : pousse un symbole (constante connue ou variable).
    pub fn pousser_special(&mut self, nom: &str) {
        if self.en_saisie {
            self.entrer();
        }
        let r = self.moteur.push_symbol(nom);
        self.set_valeur(r);
    }

    /// →M : mémorise la valeur affichée dans M, puis réévalue la pile.
    pub fn memoriser(&mut self) {
        if let Some(v) = self.valeur_affichee() {
            let r = self.moteur.set_variable(NOM_MEMOIRE, Some(v));
            self.set_valeur(r);
        }
    }

    /// AC : écran à 0, journal vidé, moteur (pile + variables) remis à zéro.
    pub fn tout_effacer(&mut self) {
        self.set_valeur(Some(0.0));
        self.journal = JOURNAL_INITIAL.to_string();
        self.erreur_programme.clear();
        self.moteur.clear();
    }

    /* ------------------------ Lectures ------------------------ */

    /// Historique des expressions (moteur), la plus ancienne d’abord.
    pub fn description(&self) -> String {
        self.moteur.description()
    }

    /// Valeur de M pour l’indicateur mémoire (None si jamais affectée).
    pub fn memoire(&self) -> Option<String> {
        self.moteur
            .variable(NOM_MEMOIRE)
            .map(|v| v.map_or_else(|| JETON_ERREUR.to_string(), format_valeur))
    }

    /* ------------------------ Programme ------------------------ */

    pub fn exporter_programme(&mut self) {
        match self.moteur.programme().vers_json() {
            Ok(json) => {
                self.programme_json = json;
                self.erreur_programme.clear();
            }
            Err(msg) => self.erreur_programme = msg,
        }
    }

    /// Recharge la pile depuis `programme_json`. Variables conservées.
    pub fn importer_programme(&mut self) {
        match Programme::depuis_json(self.programme_json.trim()) {
            Ok(p) => {
                let r = self.moteur.charger_programme(&p);
                self.set_valeur(r);
                self.erreur_programme.clear();
            }
            Err(msg) => {
                log::warn!("{msg}");
                self.erreur_programme = msg;
            }
        }
    }

    /// Ajoute une ligne au journal.
    fn noter(&mut self, ligne: &str) {
        self.journal.push('\n');
        self.journal.push_str(ligne);
    }
}
