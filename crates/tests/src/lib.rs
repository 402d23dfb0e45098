#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod access_tests;

#[cfg(test)]
mod nav_tests;

#[cfg(test)]
mod listing_tests;

#[cfg(test)]
mod catalog_tests;

#[cfg(test)]
mod product_form_tests;
