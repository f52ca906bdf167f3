/// full plan - messy tabular input through the ingest adapters, then a
/// semimonthly plan with ancillary costs, exported as JSON
use renegotiation_rs::{
    compute_plan, ingest, AncillaryCosts, CalculationContext, Invoice, Money, Periodicity, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // what a spreadsheet row set looks like before cleaning
    let headers: Vec<String> = ["RUT Cliente", "Compañía", "M. Pendiente", "F. Vcto."]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = [
        ("12.345.678-5", "$ 850.000", "04-12-2023"),
        ("12345678k", "325.500", "15/01/2024"),
        ("12.345.678-5", "n/a", "sin fecha"),
    ];

    let amount_col = ingest::resolve_field(&headers, ingest::AMOUNT_CANDIDATES)
        .ok_or("no amount column")?;
    let date_col = ingest::resolve_field(&headers, ingest::DUE_DATE_CANDIDATES)
        .ok_or("no due date column")?;
    println!("resolved columns: amount={:?} due={:?}", amount_col, date_col);

    let invoices: Vec<Invoice> = rows
        .into_iter()
        .map(|(_, amount, due)| Invoice::new(ingest::coerce_amount(amount), ingest::coerce_date(due)))
        .collect();

    let rut = ingest::normalize_rut(rows[0].0).ok_or("bad rut")?;
    println!("customer: {}", ingest::format_rut(&rut));

    let ctx = CalculationContext::new(
        renegotiation_rs::chrono::NaiveDate::from_ymd_opt(2024, 2, 1).ok_or("bad date")?,
        Rate::from_percentage(dec!(0.5)),
        Periodicity::Semimonthly,
        4,
    )
    .with_ancillary_costs(AncillaryCosts {
        judicial: Money::from_major(45_000),
        attorney_fees: Money::from_major(80_000),
        collection: Money::from_major(12_000),
        other: Money::ZERO,
    });

    let computation = compute_plan(&invoices, &ctx)?;
    println!("{}", computation.json());

    Ok(())
}
