use std::fmt;
use std::fmt::Write;

use rust_decimal::RoundingStrategy;

use crate::models::{OrderQuery, OrderTotal, SortDirection};

const SUM_DECIMAL_PLACES: u32 = 2;

const STYLE: &str = "body { font-family: sans-serif; margin: 2rem; }
form { display: flex; gap: 0.75rem; align-items: end; margin-bottom: 1.5rem; }
label { display: flex; flex-direction: column; font-size: 0.9rem; }
table.data { border-collapse: collapse; min-width: 20rem; }
table.data th, table.data td { border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: right; }";

/// Renders the filter page. Without a query only the empty form is shown.
pub fn page(query: Option<&OrderQuery>, orders: &[OrderTotal]) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(output, "<!DOCTYPE html>")?;
    writeln!(output, "<html lang=\"en\">")?;
    writeln!(output, "<head>")?;
    writeln!(output, "<meta charset=\"utf-8\">")?;
    writeln!(output, "<title>Orders by total value</title>")?;
    writeln!(output, "<style>\n{STYLE}\n</style>")?;
    writeln!(output, "</head>")?;
    writeln!(output, "<body>")?;
    writeln!(output, "<h1>Find orders by total value</h1>")?;

    write_form(&mut output, query)?;

    if query.is_some() {
        write_table(&mut output, orders)?;
    }

    writeln!(output, "</body>")?;
    writeln!(output, "</html>")?;

    Ok(output)
}

fn write_form(output: &mut String, query: Option<&OrderQuery>) -> fmt::Result {
    let min_value = query.map(|query| query.min_value.to_string()).unwrap_or_default();
    let max_value = query.map(|query| query.max_value.to_string()).unwrap_or_default();
    let direction = query.map(|query| query.direction).unwrap_or(SortDirection::Ascending);

    writeln!(output, "<form method=\"post\" action=\"/\">")?;
    writeln!(output, "<label>Minimum value <input type=\"number\" step=\"any\" name=\"min_value\" value=\"{min_value}\" required></label>")?;
    writeln!(output, "<label>Maximum value <input type=\"number\" step=\"any\" name=\"max_value\" value=\"{max_value}\" required></label>")?;
    writeln!(output, "<label>Sort <select name=\"sort_type\">")?;

    for (option, label) in [(SortDirection::Ascending, "Ascending"), (SortDirection::Descending, "Descending")] {
        let selected = if option == direction { " selected" } else { "" };
        writeln!(output, "<option value=\"{option}\"{selected}>{label}</option>")?;
    }

    writeln!(output, "</select></label>")?;
    writeln!(output, "<button type=\"submit\">Search</button>")?;
    writeln!(output, "</form>")
}

fn write_table(output: &mut String, orders: &[OrderTotal]) -> fmt::Result {
    writeln!(output, "<table class=\"data\">")?;
    writeln!(output, "<thead><tr><th>OrderID</th><th>Sum</th></tr></thead>")?;
    writeln!(output, "<tbody>")?;

    for order in orders {
        let sum = order.sum.round_dp_with_strategy(SUM_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        writeln!(output, "<tr><td>{}</td><td>{:.2}</td></tr>", order.order_id, sum)?;
    }

    writeln!(output, "</tbody>")?;
    writeln!(output, "</table>")
}
