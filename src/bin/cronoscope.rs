use clap::Parser;
use cronoscope::display::occurrence_stamp;
use cronoscope::{DayPolicy, Schedule};
use jiff::Zoned;
use std::process;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "cronoscope", about = "Cron expression expander", version)]
struct Cli {
    /// Cron expression: five fields and a command (e.g. "*/15 * * * * /usr/bin/find")
    expression: Option<String>,

    /// Number of upcoming run times to show (bare flag means 1)
    #[arg(short = 'n', long = "next", num_args = 0..=1, default_missing_value = "1")]
    next: Option<u32>,

    /// Reference instant for --next (ISO 8601 civil datetime); defaults to now
    #[arg(long, requires = "next")]
    from: Option<String>,

    /// Match day-of-month OR day-of-week when both are restricted (standard cron)
    #[arg(long)]
    cron_days: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate the expression without printing the table
    #[arg(long)]
    check: bool,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Values")]
    values: String,
}

#[derive(Tabled)]
struct OccurrenceRow {
    #[tabled(rename = "Occurrence")]
    number: usize,
    #[tabled(rename = "Date and Time")]
    when: String,
}

fn main() {
    let cli = Cli::parse();

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    let schedule = match Schedule::parse(expression) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    // Compute occurrences before printing anything so a failed search
    // leaves no partial table behind.
    let occurrences = cli.next.map(|requested| {
        let mut n = requested;
        if n > 1000 {
            eprintln!("warning: capped at 1000 occurrences");
            n = 1000;
        }

        let after = match cli.from {
            Some(ref raw) => match raw.parse() {
                Ok(dt) => dt,
                Err(e) => {
                    eprintln!("error: invalid --from datetime: {e}");
                    process::exit(1);
                }
            },
            None => Zoned::now().datetime(),
        };

        let policy = if cli.cron_days {
            DayPolicy::Either
        } else {
            DayPolicy::Both
        };

        match schedule.upcoming(after, n as usize, policy) {
            Ok(instants) => instants
                .into_iter()
                .map(occurrence_stamp)
                .collect::<Vec<_>>(),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    });

    if cli.json {
        let mut doc = match serde_json::to_value(&schedule) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        };
        if let Some(ref stamps) = occurrences {
            doc["occurrences"] = serde_json::json!(stamps);
        }
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
        return;
    }

    let rows: Vec<FieldRow> = schedule
        .rows()
        .into_iter()
        .map(|(field, values)| FieldRow { field, values })
        .collect();
    println!("{}", Table::new(&rows).with(Style::ascii()));

    if let Some(stamps) = occurrences {
        let rows: Vec<OccurrenceRow> = stamps
            .into_iter()
            .enumerate()
            .map(|(i, when)| OccurrenceRow { number: i + 1, when })
            .collect();
        println!("{}", Table::new(&rows).with(Style::ascii()));
    }
}
