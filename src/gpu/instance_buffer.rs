//! Growable GPU buffer of per-instance records.

use std::marker::PhantomData;

/// Smallest allocation, in bytes.
const MIN_CAPACITY: usize = 64;

/// Vertex buffer holding `T` records that grows when more are written than
/// fit. Never shrinks.
pub struct InstanceBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: u32,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> InstanceBuffer<T> {
    /// Empty buffer with room for `capacity` records.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let capacity = (capacity * std::mem::size_of::<T>()).max(MIN_CAPACITY);
        Self {
            buffer: Self::allocate(device, label, capacity),
            capacity,
            count: 0,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    fn allocate(device: &wgpu::Device, label: &str, size: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: size as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents with `data`, reallocating if it does not fit.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let reallocated = bytes.len() > self.capacity;
        if reallocated {
            self.capacity = grown_capacity(self.capacity, bytes.len());
            self.buffer = Self::allocate(device, &self.label, self.capacity);
            log::debug!("{}: grew to {} bytes", self.label, self.capacity);
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.count = u32::try_from(data.len()).unwrap_or(u32::MAX);
        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of records last written.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Next capacity for a buffer that must hold `needed` bytes: double what is
/// needed, growing by at least 1 KiB.
fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_doubles_large_requests() {
        assert_eq!(grown_capacity(64, 4096), 8192);
    }

    #[test]
    fn growth_adds_at_least_a_kilobyte() {
        assert_eq!(grown_capacity(2048, 2100), 4200);
        assert_eq!(grown_capacity(4096, 4100), 8200);
        assert_eq!(grown_capacity(64, 100), 1088);
    }
}
