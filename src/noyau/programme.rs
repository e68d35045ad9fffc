// src/noyau/programme.rs
//
// Représentation “programme” : une chaîne par entrée de pile (son symbole).
//
// Chargement :
// - symbole connu (table)      => l’Op connue
// - sinon, nombre lisible       => Operande
// - sinon (ex: variable “x”)    => ignoré silencieusement (journalisé en warn)

use serde::{Deserialize, Serialize};

use super::nombre::lire_valeur;
use super::op::Op;
use super::table::TableOperateurs;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Programme(pub Vec<String>);

impl Programme {
    /// Sérialise une pile (ordre d’entrée conservé).
    pub fn depuis_pile(ops: &[Op]) -> Self {
        Programme(ops.iter().map(Op::symbole).collect())
    }

    /// Reconstruit une pile ; les symboles inconnus sont abandonnés.
    pub fn vers_pile(&self, table: &TableOperateurs) -> Vec<Op> {
        let mut pile = Vec::with_capacity(self.0.len());

        for symbole in &self.0 {
            if let Some(op) = table.get(symbole) {
                pile.push(op.clone());
            } else if let Some(v) = lire_valeur(symbole) {
                pile.push(Op::Operande(v));
            } else {
                log::warn!("programme: symbole {symbole:?} ignoré (ni opérateur ni nombre)");
            }
        }

        pile
    }

    pub fn vers_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("programme → JSON: {e}"))
    }

    pub fn depuis_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| format!("JSON → programme: {e}"))
    }
}

impl<S: Into<String>> FromIterator<S> for Programme {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Programme(iter.into_iter().map(Into::into).collect())
    }
}
