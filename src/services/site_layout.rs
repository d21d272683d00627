//! Fixed structural paths into the opportunity page. The site's DOM layout
//! is brittle by nature; when it changes, this table is the only place that
//! needs editing.

/// Which part of the resolved node a field reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextPart {
    /// All descendant text, concatenated and trimmed.
    Content,
    /// The n-th direct text-node child (1-based), trimmed. Used where one
    /// element carries several bare text segments separated by markup.
    NthText(usize),
}

#[derive(Debug, Clone)]
pub struct FieldPath {
    pub selector: &'static str,
    pub part: TextPart,
}

/// Structural description of the listing page: one path per static field,
/// in export order.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    pub fields: Vec<(&'static str, FieldPath)>,
}

impl SiteLayout {
    pub fn aiesec() -> Self {
        let path = |selector: &'static str, part: TextPart| FieldPath { selector, part };
        SiteLayout {
            fields: vec![
                (
                    "Program",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(2) > div:nth-of-type(1) > div > div:nth-of-type(2) > h3",
                        TextPart::Content,
                    ),
                ),
                (
                    "Backgrounds",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(2) > div:nth-of-type(3) > div > div:nth-of-type(2) > h3",
                        TextPart::Content,
                    ),
                ),
                (
                    "Nombre_opp",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(1) > div > div > div:nth-of-type(1) > h3",
                        TextPart::Content,
                    ),
                ),
                (
                    "Empresa",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(1) > div > div > div:nth-of-type(2)",
                        TextPart::NthText(1),
                    ),
                ),
                (
                    "Host_entity",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(1) > div > div > div:nth-of-type(2)",
                        TextPart::NthText(2),
                    ),
                ),
                (
                    "Salario",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(2) > div:nth-of-type(4) > div > div:nth-of-type(2) > h3 > span",
                        TextPart::Content,
                    ),
                ),
                (
                    "Dias_de_proceso",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(6) > div > div:nth-of-type(2) > div:nth-of-type(1) > span > b",
                        TextPart::NthText(1),
                    ),
                ),
                (
                    "Idiomas",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(2) > div:nth-of-type(2) > div:nth-of-type(2) > div > div:nth-of-type(2) > h3",
                        TextPart::Content,
                    ),
                ),
                (
                    "Horario",
                    path(
                        "body > div:nth-of-type(2) > main > div > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(4) > div > div:nth-of-type(2) > div:nth-of-type(2)",
                        TextPart::Content,
                    ),
                ),
            ],
        }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }
}
