//! Plain-text rendering of the scoreboard.

use super::{Session, Snapshot};

/// Draw the board for the current session.
pub fn render(session: &Session, snapshot: Option<&Snapshot>) -> String {
    let mut out = String::new();

    out.push_str("=== Sipboard ===\n");
    match session {
        Session::NoName => out.push_str("Player: (none) - type `name <your name>` to join\n"),
        Session::Active { player } => out.push_str(&format!("Player: {}\n", player)),
    }

    let Some(snapshot) = snapshot else {
        out.push_str("\n(scoreboard not loaded yet)\n");
        return out;
    };

    out.push_str("\nSips per player\n");
    if snapshot.players.is_empty() {
        out.push_str("  (no players yet)\n");
    }
    for (name, entry) in &snapshot.players {
        out.push_str(&format!("  {}: {} sips\n", name, entry.total()));
    }

    out.push_str("\nRules\n");
    if snapshot.rules.is_empty() {
        out.push_str("  (no rules yet)\n");
    }
    for (index, rule) in snapshot.rules.iter().enumerate() {
        out.push_str(&format!(
            "  [{}] {} - {} sips\n",
            index,
            rule.text(),
            rule.cost()
        ));
    }

    out
}
