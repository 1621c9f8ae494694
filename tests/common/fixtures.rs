//! Static payloads used across harnesses.
//!
//! Each fixture is the JSON text a source could return: the spreadsheet rows
//! as a bare array, the same rows wrapped in a `data` envelope, and shapes
//! that must load as an empty collection.

/// Spreadsheet export with the real column headers, including the emoji and
/// accented ones, formula errors, numeric cells and an unknown column.
pub const SHEET_ROWS: &str = r##"[
  {
    "BLOCO e APT": "1-101",
    "Nomes": "Maria Silva",
    "Placa": "ABC1D23",
    "Telefone 📞": "(11) 98765-4321",
    "Carro - modelo 🚘": "Fiat Uno",
    "ADESIVO DE IDENTIFICAÇÃO": "0012",
    "Observações 📋": "",
    "OBS VAGAS ALUGADAS": "aluga vaga para 2-204"
  },
  {
    "BLOCO e APT": "1-102",
    "Nomes": "João Pereira",
    "Placa": "#N/A",
    "Telefone 📞": 11912345678,
    "Carro - modelo 🚘": "#REF!",
    "Observações 📋": "Vazamento no banheiro"
  },
  {
    "BLOCO e APT": "  ",
    "Nomes": "#NAME?",
    "Placa": "XYZ9K87",
    "Carro - modelo 🚘": "VW Gol",
    "ADESIVO DE IDENTIFICAÇÃO": "#VALUE!",
    "Coluna 9": "ignored"
  },
  {
    "BLOCO e APT": "2-204",
    "Nomes": "Ana Souza",
    "Placa": "  ",
    "OBS VAGAS ALUGADAS": "#DIV/0!",
    "Observações 📋": "Mudança dia 12"
  }
]"##;

/// The same rows wrapped in an envelope.
pub fn sheet_envelope() -> String {
    format!(r#"{{"data": {SHEET_ROWS}}}"#)
}

pub fn sheet_rows() -> serde_json::Value {
    serde_json::from_str(SHEET_ROWS).expect("SHEET_ROWS is valid JSON")
}

/// Payloads that are valid JSON but not a record sequence.
pub const MALFORMED_PAYLOADS: &[&str] = &[
    "42",
    "null",
    r#""rows""#,
    r#"{"data": {"Nomes": "Maria"}}"#,
    r#"{"rows": []}"#,
    "true",
];

/// The end-to-end scenario: one sentinel plate, one blank block.
pub const MARIA_JOAO: &str = r##"[
  {"BLOCO e APT": "1-101", "Nomes": "Maria", "Placa": "#N/A"},
  {"BLOCO e APT": "", "Nomes": "João", "Placa": "XYZ9"}
]"##;
