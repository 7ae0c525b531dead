//! Prompt catalog: the fixed table mapping each [`Mode`] to its prompt
//! template and the idea fields the model is expected to fill.
//!
//! The table is immutable `static` data, so concurrent readers need no
//! synchronization. Adding a mode means adding a `Mode` variant and one entry
//! here; the `entry_order_matches_mode_all` test keeps the two aligned.

use crate::enums::{IdeaField, Mode};
use crate::errors::CoreError;

/// Number of ideas requested from the model when no count is configured.
pub const DEFAULT_IDEA_COUNT: u32 = 50;

/// One row of the catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    pub mode: Mode,
    /// Short human-readable name of the mode.
    pub label: &'static str,
    /// One-line summary of what the mode produces.
    pub description: &'static str,
    /// Fields the model is expected to populate for this mode.
    pub fields: &'static [IdeaField],
    template: fn(&str, u32) -> String,
}

impl CatalogEntry {
    /// Render the prompt for `input` with the default idea count.
    #[must_use]
    pub fn prompt(&self, input: &str) -> String {
        self.prompt_with_count(input, DEFAULT_IDEA_COUNT)
    }

    /// Render the prompt for `input`, asking for `count` ideas.
    #[must_use]
    pub fn prompt_with_count(&self, input: &str, count: u32) -> String {
        (self.template)(input, count)
    }
}

const FOCUS: &str = "yang berfokus pada aspek-aspek praktis dan aplikatif dari topik tersebut, \
serta menyoroti tren terbaru, inovasi, dan studi kasus yang dapat memberikan wawasan mendalam \
bagi pembaca yang ingin memahami dan menerapkan konsep-konsep ini dalam konteks nyata.";

const DETAIL: &str = "tolong berikan deskripsi detail dari setiap topik yang telah disediakan \
untuk bahan penelitian lebih lanjut";

const RCTFM: &str = "dengan framework R.C.T.F.M: Role (Peran) (R), Context (Konteks) (C), \
Task (Tugas) (T), Format (Format) (F), dan Meta-Cognition (Metakognisi) (M).";

fn research_prompt(input: &str, count: u32) -> String {
    format!(
        "Buatkan {count} list topik penelitian dengan studi yang relevan dengan \"{input}\" \
         {FOCUS}\n\n{DETAIL}"
    )
}

fn business_prompt(input: &str, count: u32) -> String {
    format!(
        "{}\n\nberikan juga refined prompt/instruction (text) untuk disesuaikan berdasarkan \
         sesuai kebutuhan proyek dan organisasi agar dapat dimengerti oleh AI Generative Model \
         (seperti Claude, Gemini) {RCTFM}",
        research_prompt(input, count)
    )
}

fn python_prompt(input: &str, count: u32) -> String {
    format!(
        "Buatkan {count} list topik untuk pembuatan python script dengan studi kasus yang \
         relevan dengan \"{input}\" {FOCUS}\n\n{DETAIL}\n\nberikan juga refined \
         prompt/instruction (text) untuk detail alur pengimplementasinya, fitur yang dapat \
         ditambahkan, dan parameter serta fungsi dengan skalabilitas tinggi yang dapat \
         disesuaikan berdasarkan sesuai kebutuhan proyek dan organisasi agar dapat dimengerti \
         oleh AI Generative Model (seperti Claude, Gemini) untuk membuat kode programnya {RCTFM}"
    )
}

static CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        mode: Mode::Research,
        label: "Research Topics",
        description: "Find in-depth research topics with case studies.",
        fields: &[IdeaField::Category, IdeaField::Title, IdeaField::Description],
        template: research_prompt,
    },
    CatalogEntry {
        mode: Mode::Business,
        label: "Research & Business",
        description: "Topics with business analysis, monetization strategies, and implementation prompts.",
        fields: &[
            IdeaField::Category,
            IdeaField::Title,
            IdeaField::Description,
            IdeaField::MoneyValue,
            IdeaField::EffortValue,
            IdeaField::MonetizationStrategies,
            IdeaField::RefinedPrompt,
        ],
        template: business_prompt,
    },
    CatalogEntry {
        mode: Mode::Python,
        label: "Python Scripts",
        description: "Technical Python script ideas with implementation prompts.",
        fields: &[
            IdeaField::Category,
            IdeaField::Title,
            IdeaField::Description,
            IdeaField::RefinedPrompt,
        ],
        template: python_prompt,
    },
];

impl Mode {
    /// Catalog entry for this mode.
    #[must_use]
    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            Self::Research => &CATALOG[0],
            Self::Business => &CATALOG[1],
            Self::Python => &CATALOG[2],
        }
    }
}

/// Look up the catalog entry registered under `mode`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidMode`] if `mode` is not a registered key.
pub fn resolve(mode: &str) -> Result<&'static CatalogEntry, CoreError> {
    mode.parse::<Mode>().map(Mode::entry)
}

/// All catalog entries, in declaration order.
#[must_use]
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}
