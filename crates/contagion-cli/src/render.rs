//! Text rendering of a grid snapshot.

use contagion_world::GridSnapshot;

/// One glyph per host, one line per row: `s` susceptible, `e` exposed,
/// `I` infectious, `R` recovered, and a blank for the deceased.
pub fn render_text(snapshot: &GridSnapshot) -> String {
    let cols = snapshot.cols as usize;
    let mut out = String::with_capacity(snapshot.hosts.len() + snapshot.rows as usize);
    for (index, host) in snapshot.hosts.iter().enumerate() {
        out.push(host.stage.glyph());
        if (index + 1) % cols == 0 {
            out.push('\n');
        }
    }
    out
}
