//! Fill a cost table and read off the distance.

use ed_types::CostModel;
use ed_vis::render_table;
use edist::EditDp;

fn main() {
    let dp = EditDp::new(CostModel::default());
    let table = dp.table(b"stall", b"table");
    print!("{}", render_table(&table));
    println!("distance: {}", table.distance());
}
