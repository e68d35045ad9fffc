//! Moteur d’évaluation : pile + table des opérateurs + variables.
//!
//! Chaque mutation (push / opérateur / variable) relance une évaluation
//! COMPLÈTE de la pile et retourne le résultat (ou None).
//!
//! Contrats :
//! - la pile ne change que par ajout en fin (push) ou remise à zéro (clear)
//! - évaluation et affichage lisent la pile sans jamais la modifier
//! - un échec n’est jamais fatal : le moteur reste utilisable

use super::eval::{evaluer_sommet, Variables};
use super::format::decrire;
use super::op::Op;
use super::programme::Programme;
use super::table::TableOperateurs;

#[derive(Clone, Debug)]
pub struct Moteur {
    pile: Vec<Op>,
    operateurs: TableOperateurs,
    variables: Variables,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new()
    }
}

impl Moteur {
    /// Moteur avec la table standard.
    pub fn new() -> Self {
        Self::avec_table(TableOperateurs::standard())
    }

    /// Moteur avec une table fournie (construite une fois, puis figée).
    pub fn avec_table(operateurs: TableOperateurs) -> Self {
        if operateurs.is_empty() {
            log::warn!("moteur créé sans aucun opérateur connu");
        } else {
            log::debug!("moteur: {} opérateurs connus", operateurs.len());
        }
        Self {
            pile: Vec::new(),
            operateurs,
            variables: Variables::new(),
        }
    }

    /* ------------------------ Mutations ------------------------ */

    /// Empile un nombre puis réévalue.
    pub fn push_number(&mut self, valeur: f64) -> Option<f64> {
        self.empiler(Op::Operande(valeur));
        self.evaluate()
    }

    /// Empile une constante connue (π) ou, à défaut, une variable.
    pub fn push_symbol(&mut self, nom: &str) -> Option<f64> {
        let op = match self.operateurs.get(nom) {
            Some(connu) => connu.clone(),
            None => Op::ConstanteOuVariable(nom.to_string(), None),
        };
        self.empiler(op);
        self.evaluate()
    }

    /// Empile un opérateur connu puis réévalue.
    /// Symbole inconnu => None, pile intacte.
    pub fn apply_operator(&mut self, symbole: &str) -> Option<f64> {
        let Some(op) = self.operateurs.get(symbole).cloned() else {
            log::warn!("opérateur inconnu: {symbole:?}");
            return None;
        };
        self.empiler(op);
        self.evaluate()
    }

    /// Affecte (Some) ou efface (None) une variable, puis réévalue :
    /// une expression en attente voit la nouvelle valeur immédiatement.
    pub fn set_variable(&mut self, nom: &str, valeur: Option<f64>) -> Option<f64> {
        log::debug!("variable {nom} := {valeur:?}");
        self.variables.insert(nom.to_string(), valeur);
        self.evaluate()
    }

    /// Vide la pile ET les variables.
    pub fn clear(&mut self) {
        log::debug!("remise à zéro ({} entrées)", self.pile.len());
        self.pile.clear();
        self.variables.clear();
    }

    fn empiler(&mut self, op: Op) {
        log::debug!("empile {op}");
        self.pile.push(op);
    }

    /* ------------------------ Lectures ------------------------ */

    /// Résultat de l’expression au sommet (reste ignoré).
    pub fn evaluate(&self) -> Option<f64> {
        let r = evaluer_sommet(&self.pile, &self.variables);
        log::trace!("évaluation: {r:?}");
        r
    }

    /// Historique complet des expressions, la plus ancienne d’abord.
    pub fn description(&self) -> String {
        decrire(&self.pile)
    }

    pub fn variable(&self, nom: &str) -> Option<Option<f64>> {
        self.variables.get(nom).copied()
    }

    /* ------------------------ Programme ------------------------ */

    /// Représentation “programme” de la pile courante.
    pub fn programme(&self) -> Programme {
        let n = self.pile.iter().filter(|op| op.est_variable()).count();
        if n > 0 {
            log::debug!("programme: {n} variable(s) ne seront pas relues au chargement");
        }
        Programme::depuis_pile(&self.pile)
    }

    /// Remplace la pile par celle du programme (variables conservées),
    /// puis réévalue.
    pub fn charger_programme(&mut self, programme: &Programme) -> Option<f64> {
        self.pile = programme.vers_pile(&self.operateurs);
        log::debug!("programme chargé: {} entrées", self.pile.len());
        self.evaluate()
    }
}
