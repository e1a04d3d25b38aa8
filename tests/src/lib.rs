mod flows;
mod persistence;
