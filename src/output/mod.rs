// Output formatting: terminal display of study packs and vocabularies.

pub mod terminal;
