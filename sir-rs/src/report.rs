use crate::{metrics::Metrics, parameters::Parameters};

/// Renders the plain-text run report (MIME `text/plain` when exported).
///
/// `report_date` is caller-supplied so the renderer stays a pure function;
/// pass `None` to omit the date line.
pub fn render(parameters: &Parameters, metrics: &Metrics, report_date: Option<&str>) -> String {
    let mut report = format!(
        "\
SIR MODEL REPORT
==============================================

Parameters:
  beta (infection rate): {beta}
  gamma (recovery rate): {gamma}
  Population: {population}
  Initial infected: {initial_infected}
  Duration: {days} days

Results:
  R0 = {r0:.3}
  Peak infected = {peak:.0} (day {peak_day})
  Total infected = {total:.0} ({percent:.1}%)

Observations:
  - Higher beta: faster spread, higher peak
  - Higher gamma: faster recovery, lower peak
  - R0 > 1: epidemic grows
  - R0 < 1: epidemic fades
",
        beta = parameters.beta,
        gamma = parameters.gamma,
        population = parameters.population,
        initial_infected = parameters.initial_infected,
        days = parameters.days,
        r0 = metrics.r0,
        peak = metrics.peak_infected,
        peak_day = metrics.peak_day,
        total = metrics.total_infected,
        percent = metrics.percent_infected,
    );

    if let Some(date) = report_date {
        report.push_str(&format!("\nReport date: {date}\n"));
    }

    report
}
