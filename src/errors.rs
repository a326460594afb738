// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get at them.
error_chain! {

    foreign_links {
        DocOptFailure(::docopt::Error);
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {} x {}: both must be at least 1", rows, columns)
        }

        SeedBlockOutOfBounds(size: usize, rows: usize, columns: usize) {
            description("central square does not fit in the grid")
            display("central square of size {} does not fit in a {} x {} grid", size, rows, columns)
        }
    }
}
