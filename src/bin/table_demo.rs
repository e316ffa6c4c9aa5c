use chaintable::{ChainedTable, Diagnostics, GrowthEvent, TableBuilder};

/// Prints growth events as they happen.
struct PrintDiagnostics;

impl Diagnostics for PrintDiagnostics {
    fn on_grow(&mut self, event: &GrowthEvent) {
        println!(
            "\x1b[33mExpanding table from {} to {} at current size of {}\x1b[0m",
            event.old_capacity, event.new_capacity, event.occupied_at_trigger
        );
    }
}

fn run() -> chaintable::Result<ChainedTable<PrintDiagnostics>> {
    let mut table = TableBuilder::new()
        .with_diagnostics(PrintDiagnostics)
        .build()?;
    for i in 0..100 {
        table.insert(i, i * 2)?;
    }
    for i in 200..220 {
        table.insert(i, i * 4)?;
    }
    Ok(table)
}

fn main() {
    let table = match run() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("table_demo failed: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", table);
    println!(
        "capacity: {}, occupied slots: {}, entries: {}",
        table.capacity(),
        table.occupied_slots(),
        table.len()
    );
    println!("get(200) = {:?}, get(40) = {:?}", table.get(200), table.get(40));
    println!("Released {} entries", table.destroy());
}
