mod executor;
mod moves;
