// Test fixtures with known texts and their reference segmentations
// WHY: metric assertions need deterministic text/gold pairs with hand-checked boundaries
#![allow(dead_code)]

/// Abbreviations, an acronym, a state code, and a quoted sentence on one line
pub const SAMPLE_TEXT: &str = r#"Dr. Smith went to the U.S.A. in 2020. He visited New York, N.Y. and Los Angeles, Calif. The weather was great! He said, "This is amazing." Then he returned home."#;

/// Reference segmentation for SAMPLE_TEXT
pub const SAMPLE_GOLD: [&str; 5] = [
    "Dr. Smith went to the U.S.A. in 2020.",
    "He visited New York, N.Y. and Los Angeles, Calif.",
    "The weather was great!",
    r#"He said, "This is amazing.""#,
    "Then he returned home.",
];

/// Internal gold boundaries of SAMPLE_TEXT (character offsets)
pub const SAMPLE_GOLD_BOUNDARIES: [usize; 4] = [37, 87, 110, 138];

/// Rule-based output for SAMPLE_TEXT: the quoted sentence is not split from the next one
pub const SAMPLE_RULE_BASED: [&str; 4] = [
    "Dr. Smith went to the U.S.A. in 2020.",
    "He visited New York, N.Y. and Los Angeles, Calif.",
    "The weather was great!",
    r#"He said, "This is amazing." Then he returned home."#,
];

/// Punctuation-only output for SAMPLE_TEXT: every dot before a space is a boundary
pub const SAMPLE_PUNCTUATION: [&str; 7] = [
    "Dr.",
    "Smith went to the U.S.A.",
    "in 2020.",
    "He visited New York, N.Y.",
    "and Los Angeles, Calif.",
    "The weather was great!",
    r#"He said, "This is amazing." Then he returned home."#,
];

/// Same content as SAMPLE_TEXT, laid out the way an indented literal arrives
pub const INDENTED_SAMPLE_TEXT: &str = r#"
        Dr. Smith went to the U.S.A. in 2020. He visited New York, N.Y. and Los Angeles, Calif.
        The weather was great! He said, "This is amazing." Then he returned home.
        "#;

/// Decimal numbers and a listed short abbreviation
pub const DECIMAL_TEXT: &str = "The price rose 3.5 percent to $12.75 today. Mr. Lee approved it. Sales hit 4.2 million.";

pub const DECIMAL_GOLD: [&str; 3] = [
    "The price rose 3.5 percent to $12.75 today.",
    "Mr. Lee approved it.",
    "Sales hit 4.2 million.",
];

/// Gold file holding two datasets in the `{"datasets": [...]}` layout
pub const DATASETS_JSON: &str = r#"{
  "datasets": [
    {
      "id": "sample",
      "description": "abbreviations and quotes",
      "text": "Dr. Smith went to the U.S.A. in 2020. He visited New York, N.Y. and Los Angeles, Calif. The weather was great! He said, \"This is amazing.\" Then he returned home.",
      "sentences": [
        "Dr. Smith went to the U.S.A. in 2020.",
        "He visited New York, N.Y. and Los Angeles, Calif.",
        "The weather was great!",
        "He said, \"This is amazing.\"",
        "Then he returned home."
      ]
    },
    {
      "id": "decimals",
      "text": "The price rose 3.5 percent to $12.75 today. Mr. Lee approved it. Sales hit 4.2 million.",
      "sentences": [
        "The price rose 3.5 percent to $12.75 today.",
        "Mr. Lee approved it.",
        "Sales hit 4.2 million."
      ]
    }
  ]
}"#;
