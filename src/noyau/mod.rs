//! Noyau de la calculatrice à pile
//!
//! Organisation interne :
//! - op.rs        : entrée de pile (Op) + précédence d’affichage
//! - table.rs     : table des opérateurs connus (construite une fois)
//! - eval.rs      : évaluation récursive (résultat + reste)
//! - format.rs    : description infixe, parenthésage minimal
//! - nombre.rs    : règle d’affichage des f64 (entier si possible)
//! - programme.rs : représentation “programme” (liste de symboles, JSON)
//! - moteur.rs    : pile + variables, API publique

pub mod eval;
pub mod format;
pub mod moteur;
pub mod nombre;
pub mod op;
pub mod programme;
pub mod table;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::Moteur;
pub use nombre::format_valeur;
pub use programme::Programme;
