/*!
Online accumulators, which summarise a stream of samples in constant space.

Each accumulator is updated exactly once per sample and is owned by a single loop.
In a [sweep](crate::driver::Driver::sweep) a fresh pair of accumulators is made for each metric of each triple, and dropped once the row for the triple has been written.
*/

mod max;
mod mean;

pub use max::Max;
pub use mean::Mean;
