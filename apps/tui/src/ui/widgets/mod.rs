pub mod canvas;
pub mod cards;
pub mod charts;
pub mod loading;
pub mod popup;
