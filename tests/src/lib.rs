#![cfg(test)]

mod data_source_selection;
mod explore_flow;
mod testing;
