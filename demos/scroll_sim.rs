// Example: drive the viewport through a scroll script and watch the window
// being trimmed/extended while cells cycle through the reuse pool.
use tableview::{Axis, DataSource, RecyclePool, Table, TableCell, Viewport};

struct Cell {
    active: bool,
    anchor: f32,
}

impl TableCell for Cell {
    fn reuse_kind(&self) -> Option<&str> {
        Some("cell")
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn place(&mut self, anchor: f32) {
        self.anchor = anchor;
    }
}

struct Rows {
    per_section: Vec<usize>,
    instantiated: usize,
}

impl DataSource for Rows {
    type Cell = Cell;

    fn section_count(&self) -> usize {
        self.per_section.len()
    }

    fn row_count(&self, section: usize) -> usize {
        self.per_section[section]
    }

    fn header_extent(&self, _section: usize) -> f32 {
        0.0
    }

    fn row_extent(&self, section: usize, row: usize) -> f32 {
        // Heterogeneous heights to exercise the cumulative offsets.
        20.0 + ((section + row) % 3) as f32 * 10.0
    }

    fn spacing(&self, _section: usize) -> f32 {
        2.0
    }

    fn header_cell(&mut self, _pool: &mut RecyclePool<Cell>, _section: usize) -> Option<Cell> {
        None
    }

    fn row_cell(&mut self, pool: &mut RecyclePool<Cell>, _section: usize, _row: usize) -> Cell {
        match pool.take("cell") {
            Some(mut cell) => {
                cell.set_active(true);
                cell
            }
            None => {
                self.instantiated += 1;
                Cell {
                    active: true,
                    anchor: 0.0,
                }
            }
        }
    }
}

#[derive(Default)]
struct Window {
    top: f32,
    height: f32,
    content_extent: f32,
}

impl Viewport for Window {
    fn top_offset(&self) -> f32 {
        self.top
    }

    fn bottom_offset(&self) -> f32 {
        self.top + self.height
    }

    fn set_content_extent(&mut self, extent: f32) {
        self.content_extent = extent;
    }
}

fn main() {
    let source = Rows {
        per_section: vec![8, 12, 6, 10],
        instantiated: 0,
    };
    let viewport = Window {
        top: 0.0,
        height: 120.0,
        ..Window::default()
    };

    let mut table = Table::with_source(Axis::Vertical, viewport, source);
    table.reload().expect("data source attached");
    println!(
        "content extent {} | window {:?}..{:?}",
        table.viewport().content_extent,
        table.first_visible(),
        table.last_visible()
    );

    // Scroll down in steps, jump, then scroll back up.
    let script: [f32; 8] = [30.0, 60.0, 90.0, 480.0, 510.0, 240.0, 60.0, 0.0];
    for top in script {
        table.viewport_mut().top = top;
        table.on_scroll();

        let mut first_anchor = f32::NAN;
        let mut all_active = true;
        table.for_each_visible(|_, cell| {
            if first_anchor.is_nan() {
                first_anchor = cell.anchor;
            }
            all_active = all_active && cell.active;
        });
        println!(
            "top {:>5}: {} visible ({:?}..{:?}, first anchor {}, all active {}), pooled {}, instantiated {}",
            top,
            table.visible_count(),
            table.first_visible(),
            table.last_visible(),
            first_anchor,
            all_active,
            table.pool().len(),
            table.data_source().map_or(0, |s| s.instantiated),
        );
    }
}
