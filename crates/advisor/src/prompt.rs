//! Versioned prompt templates and portfolio serialisation.
//!
//! The model receives the filtered view as a fixed-width text table,
//! wrapped in one of two prompt bodies: a free-text question or a
//! qualitative review of the computed aggregates. Template text is
//! Catalan, matching the product locale.

use cartera_core::funds::PortfolioView;
use cartera_core::portfolio::AggregateResult;

/// Current prompt template ID.
pub const PROMPT_TEMPLATE_ID: &str = "advisor-ca";
/// Current prompt template version.
pub const PROMPT_TEMPLATE_VERSION: &str = "v1";

/// System and body prompts, versioned as a unit so a stored answer can
/// be traced back to the exact wording that produced it.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub id: String,
    pub version: String,
    /// System prompt for free-text questions.
    pub question_system: String,
    /// System prompt for the qualitative portfolio review.
    pub review_system: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            id: PROMPT_TEMPLATE_ID.to_string(),
            version: PROMPT_TEMPLATE_VERSION.to_string(),
            question_system: "Ets un assistent que ajuda amb l'anàlisi de dades de fons d'inversió."
                .to_string(),
            review_system: "Ets un analista d'inversions que proporciona comentaris qualitatius."
                .to_string(),
        }
    }
}

impl PromptTemplate {
    /// Builds the user prompt for a free-text question over a view.
    pub fn question_prompt(&self, view: &PortfolioView, question: &str) -> String {
        format!(
            "Tens accés a les següents dades sobre fons d'inversió:\n\n{}\n\nRespon aquesta consulta:\n{}",
            render_table(view),
            question
        )
    }

    /// Builds the user prompt for a qualitative review of the view,
    /// quoting the computed aggregates.
    pub fn review_prompt(&self, view: &PortfolioView, aggregate: &AggregateResult) -> String {
        format!(
            "Analitza aquesta cartera d'inversió basada en les dades següents:\n{}\n\n\
             - La rendibilitat mitjana ponderada és del {:.2}%.\n\
             - El nivell de risc mitjà ponderat és del {:.2} en una escala de 1 a 7.\n\
             - Les comissions mitjanes són del {:.2}%.\n\n\
             Proporciona un comentari qualitatiu sobre la diversificació, el risc, les comissions i l'adequació global.",
            render_table(view),
            aggregate.weighted_return_pct,
            aggregate.weighted_risk,
            aggregate.mean_fee_pct
        )
    }
}

/// Column alignment within the rendered table.
#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Renders a view as a fixed-width text table, one fund per line.
///
/// This is the serialised form forwarded to the model; numeric columns
/// are rounded to 2 decimal places for display only and never feed back
/// into computation. The asset-split column appears only when at least
/// one record carries it.
pub fn render_table(view: &PortfolioView) -> String {
    let has_asset_split = view.iter().any(|r| r.asset_split.is_some());

    let mut headers = vec![
        ("ISIN", Align::Left),
        ("Nom del Fons", Align::Left),
        ("Gestora", Align::Left),
        ("Pes Cartera (%)", Align::Right),
        ("Rendibilitat (%)", Align::Right),
        ("Nivell de Risc", Align::Right),
        ("Comissions (%)", Align::Right),
        ("Empreses Principals", Align::Left),
        ("Distribució Geogràfica", Align::Left),
    ];
    if has_asset_split {
        headers.push(("Distribució Actius", Align::Left));
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(view.len());
    for record in view {
        let mut row = vec![
            record.isin.clone(),
            record.name.clone(),
            record.manager.clone(),
            format!("{:.2}", record.weight_pct),
            format!("{:.2}", record.return_pct),
            record.risk_level.to_string(),
            format!("{:.2}", record.fee_pct),
            record.top_holdings.clone(),
            record.geo_split.clone(),
        ];
        if has_asset_split {
            row.push(record.asset_split.clone().unwrap_or_default());
        }
        rows.push(row);
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, (header, _))| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    render_row(
        &mut out,
        headers.iter().map(|(h, a)| (h.to_string(), *a)),
        &widths,
    );
    for row in rows {
        render_row(
            &mut out,
            row.into_iter()
                .zip(headers.iter())
                .map(|(cell, (_, align))| (cell, *align)),
            &widths,
        );
    }
    out
}

fn render_row(
    out: &mut String,
    cells: impl Iterator<Item = (String, Align)>,
    widths: &[usize],
) {
    let line: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|((cell, align), width)| {
            let pad = width - cell.chars().count();
            match align {
                Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                Align::Right => format!("{}{}", " ".repeat(pad), cell),
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartera_core::funds::FundRecord;

    fn view() -> PortfolioView {
        PortfolioView::new(vec![
            FundRecord {
                isin: "LU0599946893".to_string(),
                name: "DWS CONCEPT KALDEMORGEN".to_string(),
                manager: "DWS".to_string(),
                weight_pct: 22.62,
                return_pct: 7.0,
                risk_level: 5,
                fee_pct: 1.56,
                top_holdings: "Alphabet, Microsoft, Allianz".to_string(),
                geo_split: "Global: 100%".to_string(),
                asset_split: None,
            },
            FundRecord {
                isin: "LU0113257694".to_string(),
                name: "SISF EUR CORPORATE BOND".to_string(),
                manager: "Schroders".to_string(),
                weight_pct: 4.11,
                return_pct: 1.42,
                risk_level: 2,
                fee_pct: 1.04,
                top_holdings: "BMW, MSD Netherlands".to_string(),
                geo_split: "Europa: 80%, EUA: 20%".to_string(),
                asset_split: None,
            },
        ])
    }

    #[test]
    fn test_render_table_contains_headers_and_funds() {
        let table = render_table(&view());

        let first_line = table.lines().next().unwrap();
        assert!(first_line.contains("Nom del Fons"));
        assert!(first_line.contains("Rendibilitat (%)"));
        // No asset split in this view, so no column for it.
        assert!(!first_line.contains("Distribució Actius"));

        assert!(table.contains("DWS CONCEPT KALDEMORGEN"));
        assert!(table.contains("22.62"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_render_table_adds_asset_split_column_when_present() {
        let mut records = view().records().to_vec();
        records[0].asset_split = Some("Multiactiu: 100%".to_string());
        let table = render_table(&PortfolioView::new(records));

        assert!(table.lines().next().unwrap().contains("Distribució Actius"));
        assert!(table.contains("Multiactiu: 100%"));
    }

    #[test]
    fn test_question_prompt_embeds_table_and_question() {
        let template = PromptTemplate::default();
        let prompt = template.question_prompt(&view(), "Quina gestora pesa més?");

        assert!(prompt.contains("dades sobre fons d'inversió"));
        assert!(prompt.contains("SISF EUR CORPORATE BOND"));
        assert!(prompt.ends_with("Quina gestora pesa més?"));
    }

    #[test]
    fn test_review_prompt_quotes_rounded_aggregates() {
        let template = PromptTemplate::default();
        let aggregate = AggregateResult {
            weighted_return_pct: 6.141935,
            weighted_risk: 4.538,
            mean_fee_pct: 1.3,
            fund_count: 2,
        };

        let prompt = template.review_prompt(&view(), &aggregate);
        assert!(prompt.contains("6.14%"));
        assert!(prompt.contains("4.54 en una escala de 1 a 7"));
        assert!(prompt.contains("1.30%"));
        assert!(prompt.contains("comentari qualitatiu"));
    }
}
