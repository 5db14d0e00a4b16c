mod match_result;
mod padel_match;
