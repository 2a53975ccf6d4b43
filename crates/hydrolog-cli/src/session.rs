//! Line-oriented command dispatcher.
//!
//! This is the UI layer the core treats as an external collaborator: it
//! parses raw input into commands, invokes the tracker, and formats results.
//! Tracker errors become messages; they never end the session.

use hydrolog_core::TrackerService;

/// What the loop should do after handling a line.
pub enum Outcome {
    /// Text to show, then keep reading.
    Reply(String),
    /// End the session.
    Quit,
}

const HELP: &str = "\
commands:
  track <liters>    record an intake amount, e.g. `track 0.5`
  goal <units>      set the daily goal in units (1 unit = 0.1 L)
  preview <units>   preview a goal value without committing it
  next              close the day: log it, advance the date, reset intake
  log               show the history of finalized days
  audit             check every history line for its goal annotation
  status            print the live state as JSON
  help              show this text
  quit              end the session (history is not persisted)";

/// Handle one input line against the tracker.
pub fn dispatch(svc: &mut TrackerService, line: &str) -> Outcome {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Outcome::Reply(String::new());
    };
    let arg = parts.next();

    let reply = match command {
        "track" => track(svc, arg),
        "goal" => goal(svc, arg),
        "preview" => match parse_units(arg) {
            Ok(units) => svc.preview_goal(units),
            Err(msg) => msg,
        },
        "next" => {
            svc.advance_day();
            format!("New day: {}", svc.snapshot().date_text)
        }
        "log" => {
            if svc.entries().is_empty() {
                "No days logged yet.".to_string()
            } else {
                svc.log_text()
            }
        }
        "audit" => audit(svc),
        "status" => match serde_json::to_string_pretty(&svc.snapshot()) {
            Ok(json) => json,
            Err(e) => format!("error: {e}"),
        },
        "help" => HELP.to_string(),
        "quit" | "exit" => return Outcome::Quit,
        other => format!("unknown command: {other} (try `help`)"),
    };
    Outcome::Reply(reply)
}

fn track(svc: &mut TrackerService, arg: Option<&str>) -> String {
    // Unparseable text flows into the core as NaN, so the corrective hint
    // comes from one place.
    let liters = arg
        .map(|a| a.parse::<f64>().unwrap_or(f64::NAN))
        .unwrap_or(f64::NAN);
    match svc.track_intake(liters) {
        Ok(receipt) => format!(
            "Progress: {:.1} / {} units",
            receipt.display_units,
            svc.goal_units()
        ),
        Err(e) => format!("error: {e}"),
    }
}

fn goal(svc: &mut TrackerService, arg: Option<&str>) -> String {
    match parse_units(arg) {
        Ok(units) => match svc.propose_goal(units) {
            Ok(label) => format!("New goal set. {label}"),
            Err(e) => format!("error: {e}"),
        },
        Err(msg) => msg,
    }
}

fn audit(svc: &TrackerService) -> String {
    let report = svc.audit_report();
    if report.is_empty() {
        return "Nothing to audit.".to_string();
    }
    report
        .iter()
        .map(|record| {
            let verdict = if record.has_goal_annotation {
                "goal entry found in"
            } else {
                "goal missing in"
            };
            format!("{verdict}: {}", record.entry.render_line())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_units(arg: Option<&str>) -> Result<u32, String> {
    arg.ok_or_else(|| "expected a unit count, e.g. `goal 20`".to_string())?
        .parse::<u32>()
        .map_err(|_| "expected a whole number of units, e.g. `goal 20`".to_string())
}
