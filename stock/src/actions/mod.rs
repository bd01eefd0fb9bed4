mod manage_animals;
mod manage_paddocks;
mod manage_registry;
mod split_groups;
