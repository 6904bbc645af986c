mod safe;
mod tolerance;
