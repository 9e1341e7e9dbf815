use crate::assignment::Assignment;
use crate::crops::CropPlanting;
use crate::techniques::Technique;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Static per-county record. `location` is display-only (map drawing); none
/// of the objective formulas read it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct County {
    pub name: String,
    pub fips: u32,
    pub location: (i32, i32),
    pub gradient_angle: f64,
    pub plantings: Vec<CropPlanting>,
}

impl County {
    /// Total acres planted across all of the county's crops.
    pub fn total_acres(&self) -> f64 {
        self.plantings.iter().map(|p| p.acres_planted).sum()
    }
}

/// The county list plus the geographic adjacency relation. Built once
/// before optimization starts and read-only afterwards; every evaluation
/// threads its own Assignment through the queries below.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CountyMap {
    counties: Vec<County>,
    adjacency: Vec<Vec<usize>>,
}

impl CountyMap {
    pub fn new(counties: Vec<County>) -> Self {
        let adjacency = vec![Vec::new(); counties.len()];
        Self {
            counties,
            adjacency,
        }
    }

    pub fn num_counties(&self) -> usize {
        self.counties.len()
    }

    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    pub fn county(&self, index: usize) -> Result<&County> {
        self.counties
            .get(index)
            .ok_or_else(|| anyhow!("County index {} out of range", index))
    }

    /// Neighbors of a county in ascending index order.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Records a shared border between two counties. The relation is
    /// undirected: both directions are stored regardless of argument
    /// order. Duplicate borders are deduplicated; a county bordering
    /// itself is corrupt input and rejected.
    pub fn add_border(&mut self, a: usize, b: usize) -> Result<()> {
        if a >= self.counties.len() || b >= self.counties.len() {
            return Err(anyhow!(
                "Border ({}, {}) references a county outside 0..{}",
                a,
                b,
                self.counties.len()
            ));
        }
        if a == b {
            return Err(anyhow!("County {} cannot border itself", a));
        }
        if let Err(pos) = self.adjacency[a].binary_search(&b) {
            self.adjacency[a].insert(pos, b);
        }
        if let Err(pos) = self.adjacency[b].binary_search(&a) {
            self.adjacency[b].insert(pos, a);
        }
        Ok(())
    }

    /// Connected components of the subgraph induced by counties currently
    /// assigned the given technique: edges exist only between adjacent
    /// counties that both use it. Isolated same-technique counties form
    /// singleton components. Components and their members come out in
    /// ascending index order, so repeated calls are bit-for-bit identical.
    pub fn connected_components_by_technique(
        &self,
        assignment: &Assignment,
        technique: Technique,
    ) -> Vec<Vec<usize>> {
        let id = technique.id();
        let included: Vec<bool> = (0..self.counties.len())
            .map(|i| assignment.technique_ids.get(i) == Some(&id))
            .collect();

        let mut visited = vec![false; self.counties.len()];
        let mut components = Vec::new();
        for start in 0..self.counties.len() {
            if !included[start] || visited[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            visited[start] = true;
            while let Some(county) = queue.pop_front() {
                component.push(county);
                for &neighbor in &self.adjacency[county] {
                    if included[neighbor] && !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    /// Total component count across all four techniques; the fragmentation
    /// measure fed into the connectivity factor.
    pub fn total_components(&self, assignment: &Assignment) -> usize {
        Technique::ALL
            .iter()
            .map(|&t| self.connected_components_by_technique(assignment, t).len())
            .sum()
    }
}
