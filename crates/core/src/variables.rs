//! Static catalog of template placeholders, partitioned by where they apply.

/// Where a placeholder may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableContext {
    FileName,
    Folder,
}

/// One named placeholder: its canonical name (as matched in templates,
/// case-insensitively) and a human-readable description for selection menus.
#[derive(Debug, Clone, Copy)]
pub struct VariableDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub context: VariableContext,
}

const FILE_NAME_VARIABLES: &[VariableDefinition] = &[
    def("Series", "Series title", VariableContext::FileName),
    def("Chapter", "Chapter number", VariableContext::FileName),
    def("Volume", "Volume number", VariableContext::FileName),
    def("Title", "Chapter title", VariableContext::FileName),
    def("Provider", "Source site the chapter was downloaded from", VariableContext::FileName),
    def("Scanlator", "Group credited with the release", VariableContext::FileName),
    def("Language", "Translation language code", VariableContext::FileName),
    def("Year", "Release year", VariableContext::FileName),
    def("Month", "Release month", VariableContext::FileName),
    def("Day", "Release day", VariableContext::FileName),
    def("Type", "Content type (manga, manhwa, ...)", VariableContext::FileName),
];

const FOLDER_VARIABLES: &[VariableDefinition] = &[
    def("Series", "Series title", VariableContext::Folder),
    def("Provider", "Source site the series is downloaded from", VariableContext::Folder),
    def("Scanlator", "Group credited with the release", VariableContext::Folder),
    def("Language", "Translation language code", VariableContext::Folder),
    def("Year", "Release year", VariableContext::Folder),
    def("Type", "Content type (manga, manhwa, ...)", VariableContext::Folder),
];

const fn def(
    name: &'static str,
    description: &'static str,
    context: VariableContext,
) -> VariableDefinition {
    VariableDefinition {
        name,
        description,
        context,
    }
}

/// The fixed, ordered catalog for one context. New placeholders may be added
/// over time; templates that do not reference them are unaffected.
pub fn variables_for(context: VariableContext) -> &'static [VariableDefinition] {
    match context {
        VariableContext::FileName => FILE_NAME_VARIABLES,
        VariableContext::Folder => FOLDER_VARIABLES,
    }
}
