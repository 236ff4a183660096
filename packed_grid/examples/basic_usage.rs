use packed_grid::{GridError, PackedGrid};

fn main() {
    println!("=== Packed Grid Examples ===\n");

    // Example 1: Marking cells
    let _ = example_marking_cells();

    // Example 2: Out-of-range coordinates
    example_bounds();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_marking_cells() -> Result<(), GridError> {
    println!("Example 1: Drawing a diagonal on an 8x8 grid of bytes");

    let mut grid = PackedGrid::<8, 8, u8>::new();
    for i in 0..grid.rows() {
        grid.mark(i, i)?;
    }

    for r in 0..grid.rows() {
        let line: String = (0..grid.cols())
            .map(|c| if grid[(r, c)] { '#' } else { '.' })
            .collect();
        println!("  {}", line);
    }
    println!("  Words: {:02x?}", grid.data());
    println!();

    Ok(())
}

fn example_bounds() {
    println!("Example 2: Coordinate checks");

    let grid = PackedGrid::<4, 4, u32>::new();

    match grid.get(5, 0) {
        Ok(v) => println!("  (5, 0) = {}", v),
        Err(e) => println!("  (5, 0) -> {}", e),
    }

    // A coordinate equal to the dimension passes the check.
    match grid.get(4, 0) {
        Ok(v) => println!("  (4, 0) = {} (padding bit)", v),
        Err(e) => println!("  (4, 0) -> {}", e),
    }
    println!();
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    const ROWS: usize = 1024;
    const COLS: usize = 768;

    let bools_bytes = ROWS * COLS * std::mem::size_of::<bool>();
    let grid = PackedGrid::<ROWS, COLS, u64>::new();
    let packed_bytes = grid.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / bools_bytes as f64));

    println!("  Storing {}x{} cells:", ROWS, COLS);
    println!("  Vec<bool>:  {} bytes", bools_bytes);
    println!("  PackedGrid: {} bytes ({} words)", packed_bytes, grid.storage_len());
    println!("  Savings:    {:.1}%", savings);
}
