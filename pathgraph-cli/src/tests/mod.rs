//! Unit tests for pathgraph-cli, grouped by area.
