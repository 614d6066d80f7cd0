// Example: minimal data source, one reload, printed window.
use tableview::{Axis, CellIndex, DataSource, RecyclePool, Table, TableCell, Viewport};

struct TextCell {
    kind: &'static str,
    text: String,
    active: bool,
    anchor: f32,
}

impl TableCell for TextCell {
    fn reuse_kind(&self) -> Option<&str> {
        Some(self.kind)
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.text.clear();
        }
    }

    fn place(&mut self, anchor: f32) {
        self.anchor = anchor;
    }
}

struct Feed {
    sections: Vec<(&'static str, usize)>,
}

impl Feed {
    fn dequeue(&self, pool: &mut RecyclePool<TextCell>, kind: &'static str) -> TextCell {
        match pool.take(kind) {
            Some(mut cell) => {
                cell.set_active(true);
                cell
            }
            None => TextCell {
                kind,
                text: String::new(),
                active: true,
                anchor: 0.0,
            },
        }
    }
}

impl DataSource for Feed {
    type Cell = TextCell;

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn row_count(&self, section: usize) -> usize {
        self.sections[section].1
    }

    fn header_extent(&self, _section: usize) -> f32 {
        24.0
    }

    fn row_extent(&self, _section: usize, _row: usize) -> f32 {
        40.0
    }

    fn spacing(&self, _section: usize) -> f32 {
        4.0
    }

    fn header_cell(&mut self, pool: &mut RecyclePool<TextCell>, section: usize) -> Option<TextCell> {
        let mut cell = self.dequeue(pool, "header");
        cell.text = format!("# {}", self.sections[section].0);
        Some(cell)
    }

    fn row_cell(&mut self, pool: &mut RecyclePool<TextCell>, section: usize, row: usize) -> TextCell {
        let mut cell = self.dequeue(pool, "row");
        cell.text = format!("{} / item {}", self.sections[section].0, row);
        cell
    }
}

struct ScrollArea {
    top: f32,
    height: f32,
    content_extent: f32,
}

impl Viewport for ScrollArea {
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
    let feed = Feed {
        sections: vec![("inbox", 3), ("archive", 5), ("spam", 2)],
    };
    let viewport = ScrollArea {
        top: 0.0,
        height: 180.0,
        content_extent: 0.0,
    };

    let mut table = Table::with_source(Axis::Vertical, viewport, feed);
    table.reload().expect("data source attached");

    println!("content extent: {}", table.viewport().content_extent);
    println!("state: {:?}", table.state());
    table.for_each_visible(|index: CellIndex, cell| {
        println!(
            "  ({}, {:?}) anchor={} active={} {:?}",
            index.section, index.slot, cell.anchor, cell.active, cell.text
        );
    });
}
