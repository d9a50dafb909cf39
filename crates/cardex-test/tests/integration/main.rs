mod examples;
mod pipeline;
mod round_trip;
