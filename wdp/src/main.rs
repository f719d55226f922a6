use anyhow::Result;
use itertools::Itertools;
use log::info;
use rucksack_rs::entities::{Item, KSInstance};
use wdp::io;
use wdp::opt::wdp_optimizer::WDPOptimizer;

fn main() -> Result<()> {
    io::init_logger()?;

    let capacity = 10;
    let items = vec![
        Item::new("a", 1, 1)?,
        Item::new("b", 2, 2)?,
        Item::new("c", 3, 3)?,
        Item::new("d", 2, 3)?,
        Item::new("e", 5, 5)?,
        Item::new("f", 6, 7)?,
        Item::new("g", 2, 4)?,
        Item::new("h", 4, 6)?,
    ];
    let instance = KSInstance::new(capacity, items)?;
    info!(
        "[MAIN] instance loaded: {} candidate items with total weight {}, capacity {}",
        instance.item_qty(),
        instance.total_item_weight(),
        instance.capacity
    );

    let solution = WDPOptimizer::new(instance).solve()?;
    info!(
        "[MAIN] selected: [{}]",
        solution.items.iter().map(|item| item.name.as_str()).join(", ")
    );

    println!("selected {} items:", solution.items.len());
    for item in &solution.items {
        println!("  {item}");
    }
    println!(
        "total value: {}, total weight: {}/{}",
        solution.total_value,
        solution.total_weight(),
        solution.capacity
    );

    Ok(())
}
