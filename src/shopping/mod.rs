pub mod aggregation;

pub use aggregation::{
    generate_from_catalog, generate_shopping_list, generate_shopping_list_with_report,
    AggregationReport, UnresolvedRecipe,
};
