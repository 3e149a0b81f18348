pub mod address_sheet;
