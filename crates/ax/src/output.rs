//! Output rendering: the sites table and raw JSON responses.

use std::io::{self, Write};

use tabled::settings::object::Columns;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};

use ax_api::Site;

/// Column width bound for the sites table.
const MAX_COL_WIDTH: usize = 30;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created At")]
    created_at: String,
    #[tabled(rename = "Updated At")]
    updated_at: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            id: s.id.clone(),
            domain: s.domain.clone(),
            status: s.status.clone(),
            created_at: s.created_at.clone(),
            updated_at: s.updated_at.clone(),
        }
    }
}

// ── Renderers ───────────────────────────────────────────────────────

/// Render the five-column site listing with bounded column widths.
pub fn sites_table(sites: &[Site]) -> String {
    let rows: Vec<SiteRow> = sites.iter().map(SiteRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(..)).with(Width::truncate(MAX_COL_WIDTH)));
    table.to_string()
}

/// Print a site listing, or the informational line for an empty one.
pub fn print_sites(sites: &[Site], quiet: bool) {
    if sites.is_empty() {
        if !quiet {
            println!("No sites found");
        }
        return;
    }
    print_output(&sites_table(sites), quiet);
}

/// Pretty-print a JSON response body.
pub fn print_json(value: &serde_json::Value, quiet: bool) {
    let rendered =
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    print_output(&rendered, quiet);
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ax_api::Site;

    use super::sites_table;

    fn site(n: u32) -> Site {
        Site {
            id: format!("site_{n}"),
            domain: format!("site{n}.example.com"),
            status: "active".into(),
            created_at: format!("2024-06-0{n}T10:00:00Z"),
            updated_at: format!("2024-06-0{n}T11:00:00Z"),
        }
    }

    #[test]
    fn table_has_five_headers_and_one_line_per_site() {
        let sites = [site(1), site(2), site(3)];
        let rendered = sites_table(&sites);

        let header = rendered.lines().nth(1).unwrap();
        for column in ["ID", "Domain", "Status", "Created At", "Updated At"] {
            assert!(header.contains(column), "missing column {column}:\n{rendered}");
        }

        // Rounded style: top border, header, separator, rows, bottom border.
        assert_eq!(rendered.lines().count(), sites.len() + 4);
    }

    #[test]
    fn rows_keep_input_order_and_values() {
        let sites = [site(1), site(2), site(3)];
        let rendered = sites_table(&sites);

        let first = rendered.find("site1.example.com").unwrap();
        let second = rendered.find("site2.example.com").unwrap();
        let third = rendered.find("site3.example.com").unwrap();
        assert!(first < second && second < third);

        assert!(rendered.contains("site_2"));
        assert!(rendered.contains("2024-06-03T10:00:00Z"));
        assert!(rendered.contains("2024-06-03T11:00:00Z"));
    }

    #[test]
    fn long_values_are_truncated_to_the_column_bound() {
        let long = Site {
            id: "site_1".into(),
            domain: format!("{}.example.com", "a".repeat(60)),
            status: "active".into(),
            created_at: "2024-06-01T10:00:00Z".into(),
            updated_at: "2024-06-01T11:00:00Z".into(),
        };
        let rendered = sites_table(std::slice::from_ref(&long));
        assert!(!rendered.contains(&long.domain));
    }
}
