pub use add_group::*;
pub use castrate_young::*;
pub use change_slot::*;
pub use delete_group::*;
pub use dry_off::*;
pub use join_animals::*;
pub use merge_groups::*;
pub use sell_animals::*;
pub use shear_animals::*;
pub use sort_groups::*;
pub use split_group::*;
pub use wean_young::*;

mod add_group;
mod castrate_young;
mod change_slot;
mod delete_group;
mod dry_off;
mod join_animals;
mod merge_groups;
mod sell_animals;
mod shear_animals;
mod sort_groups;
mod split_group;
mod wean_young;
