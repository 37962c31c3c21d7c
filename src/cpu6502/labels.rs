//! Indices of the named 6502 nodes.
//!
//! The named nodes are numbered first in the dataset. The `P0`..`P7`
//! aliases point at the raw flag latches further in; `p5` is wired to vcc.

#![allow(non_upper_case_globals)]

use crate::types::Node;

pub const a0: Node = 0;
pub const a1: Node = 1;
pub const a2: Node = 2;
pub const a3: Node = 3;
pub const a4: Node = 4;
pub const a5: Node = 5;
pub const a6: Node = 6;
pub const a7: Node = 7;
pub const x0: Node = 8;
pub const x1: Node = 9;
pub const x2: Node = 10;
pub const x3: Node = 11;
pub const x4: Node = 12;
pub const x5: Node = 13;
pub const x6: Node = 14;
pub const x7: Node = 15;
pub const y0: Node = 16;
pub const y1: Node = 17;
pub const y2: Node = 18;
pub const y3: Node = 19;
pub const y4: Node = 20;
pub const y5: Node = 21;
pub const y6: Node = 22;
pub const y7: Node = 23;
pub const p0: Node = 24;
pub const p1: Node = 25;
pub const p2: Node = 26;
pub const p3: Node = 27;
pub const p4: Node = 28;
pub const p5: Node = 183;
pub const p6: Node = 30;
pub const p7: Node = 31;
pub const s0: Node = 32;
pub const s1: Node = 33;
pub const s2: Node = 34;
pub const s3: Node = 35;
pub const s4: Node = 36;
pub const s5: Node = 37;
pub const s6: Node = 38;
pub const s7: Node = 39;
pub const nots0: Node = 40;
pub const nots1: Node = 41;
pub const nots2: Node = 42;
pub const nots3: Node = 43;
pub const nots4: Node = 44;
pub const nots5: Node = 45;
pub const nots6: Node = 46;
pub const nots7: Node = 47;
pub const pch0: Node = 48;
pub const pch1: Node = 49;
pub const pch2: Node = 50;
pub const pch3: Node = 51;
pub const pch4: Node = 52;
pub const pch5: Node = 53;
pub const pch6: Node = 54;
pub const pch7: Node = 55;
pub const pcl0: Node = 56;
pub const pcl1: Node = 57;
pub const pcl2: Node = 58;
pub const pcl3: Node = 59;
pub const pcl4: Node = 60;
pub const pcl5: Node = 61;
pub const pcl6: Node = 62;
pub const pcl7: Node = 63;
pub const notir0: Node = 64;
pub const notir1: Node = 65;
pub const notir2: Node = 66;
pub const notir3: Node = 67;
pub const notir4: Node = 68;
pub const notir5: Node = 69;
pub const notir6: Node = 70;
pub const notir7: Node = 71;
pub const ab0: Node = 72;
pub const ab1: Node = 73;
pub const ab2: Node = 74;
pub const ab3: Node = 75;
pub const ab4: Node = 76;
pub const ab5: Node = 77;
pub const ab6: Node = 78;
pub const ab7: Node = 79;
pub const ab8: Node = 80;
pub const ab9: Node = 81;
pub const ab10: Node = 82;
pub const ab11: Node = 83;
pub const ab12: Node = 84;
pub const ab13: Node = 85;
pub const ab14: Node = 86;
pub const ab15: Node = 87;
pub const db0: Node = 88;
pub const db1: Node = 89;
pub const db2: Node = 90;
pub const db3: Node = 91;
pub const db4: Node = 92;
pub const db5: Node = 93;
pub const db6: Node = 94;
pub const db7: Node = 95;
pub const adh0: Node = 96;
pub const adh1: Node = 97;
pub const adh2: Node = 98;
pub const adh3: Node = 99;
pub const adh4: Node = 100;
pub const adh5: Node = 101;
pub const adh6: Node = 102;
pub const adh7: Node = 103;
pub const adl0: Node = 104;
pub const adl1: Node = 105;
pub const adl2: Node = 106;
pub const adl3: Node = 107;
pub const adl4: Node = 108;
pub const adl5: Node = 109;
pub const adl6: Node = 110;
pub const adl7: Node = 111;
pub const alu0: Node = 112;
pub const alu1: Node = 113;
pub const alu2: Node = 114;
pub const alu3: Node = 115;
pub const alu4: Node = 116;
pub const alu5: Node = 117;
pub const alu6: Node = 118;
pub const alu7: Node = 119;
pub const pd0: Node = 120;
pub const pd1: Node = 121;
pub const pd2: Node = 122;
pub const pd3: Node = 123;
pub const pd4: Node = 124;
pub const pd5: Node = 125;
pub const pd6: Node = 126;
pub const pd7: Node = 127;
pub const sb0: Node = 128;
pub const sb1: Node = 129;
pub const sb2: Node = 130;
pub const sb3: Node = 131;
pub const sb4: Node = 132;
pub const sb5: Node = 133;
pub const sb6: Node = 134;
pub const sb7: Node = 135;
pub const idb0: Node = 136;
pub const idb1: Node = 137;
pub const idb2: Node = 138;
pub const idb3: Node = 139;
pub const idb4: Node = 140;
pub const idb5: Node = 141;
pub const idb6: Node = 142;
pub const idb7: Node = 143;
pub const idl0: Node = 144;
pub const idl1: Node = 145;
pub const idl2: Node = 146;
pub const idl3: Node = 147;
pub const idl4: Node = 148;
pub const idl5: Node = 149;
pub const idl6: Node = 150;
pub const idl7: Node = 151;
pub const dor0: Node = 152;
pub const dor1: Node = 153;
pub const dor2: Node = 154;
pub const dor3: Node = 155;
pub const dor4: Node = 156;
pub const dor5: Node = 157;
pub const dor6: Node = 158;
pub const dor7: Node = 159;
pub const nmi: Node = 160;
pub const irq: Node = 161;
pub const res: Node = 162;
pub const rdy: Node = 163;
pub const notRdy0: Node = 164;
pub const so: Node = 165;
pub const rw: Node = 166;
pub const sync_: Node = 167;
pub const clk0: Node = 168;
pub const clk1out: Node = 169;
pub const clk2out: Node = 170;
pub const clock1: Node = 171;
pub const clock2: Node = 172;
pub const cclk: Node = 173;
pub const cp1: Node = 174;
pub const clearIR: Node = 175;
pub const D1x1: Node = 176;
pub const h1x1: Node = 177;
pub const fetch: Node = 178;
pub const t2: Node = 179;
pub const t3: Node = 180;
pub const t4: Node = 181;
pub const t5: Node = 182;
pub const vcc: Node = 183;
pub const vss: Node = 184;
pub const P0: Node = 238;
pub const P1: Node = 1326;
pub const P2: Node = 906;
pub const P3: Node = 208;
pub const P4: Node = p4;
pub const P5: Node = p5;
pub const P6: Node = 670;
pub const P7: Node = 939;

/// Largest index any label uses.
pub const HIGHEST: Node = P1;
