mod phrase_table;

pub use phrase_table::PhraseTable;
