/*!
 * Associative adapter tests entry point
 */

#[path = "associative/map_test.rs"]
mod map_test;

#[path = "associative/multimap_test.rs"]
mod multimap_test;

#[path = "associative/set_test.rs"]
mod set_test;
