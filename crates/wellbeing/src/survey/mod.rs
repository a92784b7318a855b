mod attempt;
mod catalogue;
pub mod domain;
pub mod import;
mod ledger;
pub mod navigation;

pub use attempt::{AttemptError, AttemptState, SurveyAttempt};
pub use catalogue::{CatalogueError, QuestionCatalogue};
pub use domain::{ChoiceOption, Dimension, Question, QuestionId, QuestionKind, RawAnswer};
pub use import::{ResponseExportImporter, ResponseImportError};
pub use ledger::{LedgerEntry, ResponseLedger};
pub use navigation::{BranchRule, BranchingNavigation, LinearNavigation, NextQuestion};
