mod tunnel;
mod url;
