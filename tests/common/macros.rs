/// Asserts the read-out state of the cell at `(x, y)`.
#[macro_export]
macro_rules! assert_cell_state {
    ($cells:expr, $x:expr, $y:expr, $state:expr) => {
        assert_eq!(
            $cells.get($x, $y).state(),
            $state,
            "Cell ({}, {}) state mismatch",
            $x,
            $y
        );
    };
}

/// Asserts that every connected cell resolved to the given function.
#[macro_export]
macro_rules! assert_connected_all {
    ($cells:expr, $function:expr) => {
        for cell in $cells.cells().iter().filter(|c| c.connected) {
            assert_eq!(
                cell.value,
                Some($function),
                "Connected cell ({}, {}) did not resolve to {}",
                cell.x,
                cell.y,
                $function
            );
        }
    };
}
