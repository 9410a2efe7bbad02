pub mod locale_switcher;
