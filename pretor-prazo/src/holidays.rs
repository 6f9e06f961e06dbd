//! Static holiday reference tables
//!
//! National and per-state court holiday tables. Both are fixed reference
//! data compiled into the binary; they are not user-editable at runtime.
//! There are no recurrence rules - each year's holiday is a distinct entry,
//! so the tables must be extended year by year.

use chrono::NaiveDate;

/// A single holiday entry: ISO calendar date plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// ISO calendar date, `yyyy-mm-dd`, no time component
    pub date: &'static str,
    /// Official holiday name
    pub name: &'static str,
}

/// National holidays, 2025-2026.
pub static NATIONAL: &[Holiday] = &[
    Holiday { date: "2025-01-01", name: "Ano Novo" },
    Holiday { date: "2025-03-03", name: "Carnaval" },
    Holiday { date: "2025-03-04", name: "Carnaval" },
    Holiday { date: "2025-04-18", name: "Sexta-feira Santa" },
    Holiday { date: "2025-04-21", name: "Tiradentes" },
    Holiday { date: "2025-05-01", name: "Dia do Trabalho" },
    Holiday { date: "2025-06-19", name: "Corpus Christi" },
    Holiday { date: "2025-09-07", name: "Independência" },
    Holiday { date: "2025-10-12", name: "Nossa Sra. Aparecida" },
    Holiday { date: "2025-11-02", name: "Finados" },
    Holiday { date: "2025-11-15", name: "Proclamação da República" },
    Holiday { date: "2025-12-25", name: "Natal" },
    Holiday { date: "2026-01-01", name: "Ano Novo" },
    Holiday { date: "2026-02-16", name: "Carnaval" },
    Holiday { date: "2026-02-17", name: "Carnaval" },
    Holiday { date: "2026-04-03", name: "Sexta-feira Santa" },
    Holiday { date: "2026-04-21", name: "Tiradentes" },
    Holiday { date: "2026-05-01", name: "Dia do Trabalho" },
    Holiday { date: "2026-06-04", name: "Corpus Christi" },
    Holiday { date: "2026-09-07", name: "Independência" },
    Holiday { date: "2026-10-12", name: "Nossa Sra. Aparecida" },
    Holiday { date: "2026-11-02", name: "Finados" },
    Holiday { date: "2026-11-15", name: "Proclamação da República" },
    Holiday { date: "2026-12-25", name: "Natal" },
];

static GO: &[Holiday] = &[
    Holiday { date: "2025-07-26", name: "Fundação de Goiânia" },
    Holiday { date: "2025-10-24", name: "Dia do Servidor Público" },
    Holiday { date: "2026-07-26", name: "Fundação de Goiânia" },
    Holiday { date: "2026-10-24", name: "Dia do Servidor Público" },
];

static SP: &[Holiday] = &[
    Holiday { date: "2025-07-09", name: "Revolução Constitucionalista" },
    Holiday { date: "2026-07-09", name: "Revolução Constitucionalista" },
];

static RJ: &[Holiday] = &[
    Holiday { date: "2025-04-23", name: "Dia de São Jorge" },
    Holiday { date: "2026-04-23", name: "Dia de São Jorge" },
];

static MG: &[Holiday] = &[
    Holiday { date: "2025-04-21", name: "Data Magna de MG" },
    Holiday { date: "2026-04-21", name: "Data Magna de MG" },
];

static DF: &[Holiday] = &[
    Holiday { date: "2025-04-21", name: "Fundação de Brasília" },
    Holiday { date: "2026-04-21", name: "Fundação de Brasília" },
];

static RS: &[Holiday] = &[
    Holiday { date: "2025-09-20", name: "Revolução Farroupilha" },
    Holiday { date: "2026-09-20", name: "Revolução Farroupilha" },
];

static PR: &[Holiday] = &[
    Holiday { date: "2025-12-19", name: "Emancipação do Paraná" },
    Holiday { date: "2026-12-19", name: "Emancipação do Paraná" },
];

static BA: &[Holiday] = &[
    Holiday { date: "2025-07-02", name: "Independência da Bahia" },
    Holiday { date: "2026-07-02", name: "Independência da Bahia" },
];

static CE: &[Holiday] = &[
    Holiday { date: "2025-03-25", name: "Data Magna do Ceará" },
    Holiday { date: "2026-03-25", name: "Data Magna do Ceará" },
];

static PE: &[Holiday] = &[
    Holiday { date: "2025-03-06", name: "Revolução Pernambucana" },
    Holiday { date: "2026-03-06", name: "Revolução Pernambucana" },
];

/// Supported state codes with display labels.
pub fn states() -> &'static [(&'static str, &'static str)] {
    &[
        ("GO", "Goiás"),
        ("SP", "São Paulo"),
        ("RJ", "Rio de Janeiro"),
        ("MG", "Minas Gerais"),
        ("DF", "Distrito Federal"),
        ("RS", "Rio Grande do Sul"),
        ("PR", "Paraná"),
        ("BA", "Bahia"),
        ("CE", "Ceará"),
        ("PE", "Pernambuco"),
    ]
}

/// State holiday table for a state code, if one exists.
pub fn state_holidays(state: &str) -> Option<&'static [Holiday]> {
    match state {
        "GO" => Some(GO),
        "SP" => Some(SP),
        "RJ" => Some(RJ),
        "MG" => Some(MG),
        "DF" => Some(DF),
        "RS" => Some(RS),
        "PR" => Some(PR),
        "BA" => Some(BA),
        "CE" => Some(CE),
        "PE" => Some(PE),
        _ => None,
    }
}

/// Look up the holiday name for a calendar date.
///
/// The national table is checked first when enabled; the state table second,
/// when enabled and a table exists for the state code. When a date matches
/// both, the national name wins. Lookup is by exact date match.
pub fn find_holiday(
    date: NaiveDate,
    state: &str,
    consider_national: bool,
    consider_state: bool,
) -> Option<&'static str> {
    let key = date.format("%Y-%m-%d").to_string();

    if consider_national {
        if let Some(holiday) = NATIONAL.iter().find(|h| h.date == key) {
            return Some(holiday.name);
        }
    }

    if consider_state {
        if let Some(table) = state_holidays(state) {
            if let Some(holiday) = table.iter().find(|h| h.date == key) {
                return Some(holiday.name);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_national_lookup() {
        assert_eq!(
            find_holiday(date(2025, 12, 25), "GO", true, true),
            Some("Natal")
        );
        assert_eq!(find_holiday(date(2025, 12, 24), "GO", true, true), None);
    }

    #[test]
    fn test_national_flag_disables_lookup() {
        assert_eq!(find_holiday(date(2025, 12, 25), "GO", false, false), None);
    }

    #[test]
    fn test_state_lookup() {
        assert_eq!(
            find_holiday(date(2025, 7, 9), "SP", true, true),
            Some("Revolução Constitucionalista")
        );
        // Same date, different state: not a holiday there
        assert_eq!(find_holiday(date(2025, 7, 9), "GO", true, true), None);
    }

    #[test]
    fn test_national_name_wins_over_state() {
        // 2025-04-21 is both Tiradentes (national) and Data Magna de MG (state)
        assert_eq!(
            find_holiday(date(2025, 4, 21), "MG", true, true),
            Some("Tiradentes")
        );
        // With nationals disabled the state name surfaces
        assert_eq!(
            find_holiday(date(2025, 4, 21), "MG", false, true),
            Some("Data Magna de MG")
        );
    }

    #[test]
    fn test_unknown_state_has_no_table() {
        assert!(state_holidays("XX").is_none());
        assert_eq!(find_holiday(date(2025, 7, 9), "XX", false, true), None);
    }

    #[test]
    fn test_every_listed_state_has_a_table() {
        for (code, _) in states() {
            assert!(state_holidays(code).is_some(), "missing table for {code}");
        }
    }
}
